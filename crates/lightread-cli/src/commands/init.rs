//! The `lightread init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("{} already exists, skipping.", config_path.display());
    } else {
        std::fs::write(config_path, SAMPLE_CONFIG)?;
        println!("Created {}", config_path.display());
    }

    println!("\nNext steps:");
    println!("  1. lightread join --name You --phone 15550100 --book-title \"Dracula\" --day Saturday --start-date 2026-09-05");
    println!("  2. lightread load book.txt");
    println!("  3. lightread chapters");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lightread configuration

# Book files whose trimmed text is under this many characters are rejected
min_book_len = 30

[segmenter]
# Chunk width in characters when no chapter headings are found
chunk_width = 9000
# Chapters whose body is at or under this length are dropped
min_chapter_len = 30

[quiz]
# Upper bound on questions per quiz
max_questions = 20
# Sentences at or under this length are skipped
min_sentence_len = 40
"#;
