use clime_core::{CompiledUnit, CompilerFrontEnd, LineIndex, compute_ranges};
use clime_treesitter::{TreeSitterFrontEnd, TreeSitterFrontEndConfig};
use tree_sitter_c::LANGUAGE;

const SAMPLE: &str = r#"
int add(int a, int b) {
    return a + b
}

int main(void) {
    int x = add(1, 2;
    return x;
}
"#;

fn main() {
    let (path, text) = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).expect("read source file");
            (path, text)
        }
        None => ("sample.c".to_string(), SAMPLE.to_string()),
    };

    let mut front_end = TreeSitterFrontEnd::new(TreeSitterFrontEndConfig::new(LANGUAGE.into()))
        .expect("init tree-sitter");
    let unit = front_end.parse(&path, &text).expect("parse");
    let line_index = LineIndex::from_text(&text);
    let ranges = compute_ranges(unit.root(), unit.diagnostics(), &line_index);

    for (diagnostic, range) in unit.diagnostics().iter().zip(&ranges.error_ranges) {
        println!(
            "{}: {} [{}..{}]",
            diagnostic.location, diagnostic.message, range.start, range.end
        );
    }
    println!(
        "errors={} warnings={} lines_with_messages={}",
        ranges.error_ranges.len(),
        ranges.warning_ranges.len(),
        ranges.message_by_line.len()
    );
}
