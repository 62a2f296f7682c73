//! Build script to generate the embedded puzzle catalog
//!
//! Reads the puzzle data file and generates Rust source code with a const array.
//!
//! Each non-comment line of `data/puzzles.txt` is:
//! `<centre> <six edge letters> <high> <answer> <answer> ...`

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/puzzles.txt",
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Built-in spelling-bee puzzles",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/puzzles.txt");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[RawPuzzle] = &[").unwrap();

    let mut count = 0;
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        assert!(
            fields.len() >= 4,
            "{input_path}:{}: expected centre, edge, high and answers",
            line_no + 1
        );
        let high: u32 = fields[2]
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: bad high score: {e}", line_no + 1));

        writeln!(output, "    RawPuzzle {{").unwrap();
        writeln!(output, "        centre: \"{}\",", fields[0]).unwrap();
        writeln!(output, "        edge: \"{}\",", fields[1]).unwrap();
        writeln!(output, "        high: {high},").unwrap();
        write!(output, "        answers: &[").unwrap();
        for answer in &fields[3..] {
            write!(output, "\"{answer}\", ").unwrap();
        }
        writeln!(output, "],").unwrap();
        writeln!(output, "    }},").unwrap();
        count += 1;
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of puzzles in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
