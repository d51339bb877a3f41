// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    let mut content = String::from("# Benchmark Notes\n*generated content*\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(
            "Paragraph with **bold**, *italic* and `code` spans.\nIt continues on a second line.\n\n",
        );
        content.push_str("> A quoted line\n> and its continuation.\n\n");
        content.push_str("1. First step\n2. Second step\n3. Third step\n\n");
        content.push_str("- Bullet point\n- Another item\n\n");
        content.push_str("| Key | Value |\n|-----|------:|\n| a | 1 |\n| b | 2 |\n\n");
    }

    content
}
