//! Basic usage of the recase API

use recase_api::{chunk, Case, ChunkConfig, StrTransform, Transformer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: free functions / extension trait
    println!("=== Method 1: Extension Trait ===");
    let name = "Assignment teamMember";
    println!("camel:  {}", name.to_camel_case());
    println!("pascal: {}", name.to_pascal_case());
    println!("kebab:  {}", name.to_kebab_case());
    println!("snake:  {}", name.to_snake_case());

    // Method 2: runtime dispatch over a chosen convention
    println!("\n=== Method 2: Case Dispatch ===");
    let transformer = Transformer::new();
    for case in [Case::Camel, Case::Pascal, Case::Kebab, Case::Snake] {
        println!("{:?}: {}", case, transformer.convert(case, "Hello_World 123_test"));
    }

    // Method 3: configured chunking
    println!("\n=== Method 3: Chunking ===");
    let config = ChunkConfig::builder()
        .number_of_chunks(3)
        .index_chunk_length(2)
        .raw_output(true)
        .build()?;
    let output = chunk("hello world", &config)?;
    println!("pieces: {:?}", output.pieces());

    // Method 4: indentation cleanup
    println!("\n=== Method 4: Indentation ===");
    let snippet = "
        fn main() {
            println!(\"hi\");
        }
    ";
    println!("{}", snippet.trim_indent());

    Ok(())
}
