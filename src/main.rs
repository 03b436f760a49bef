// cparen: re-emit a C expression with explicit parentheses

use cparen::{parenthesize, TypeRegistry};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        let program_name = std::env::args()
            .next()
            .unwrap_or_else(|| "cparen".to_string());
        eprintln!("Usage: {} <expression>", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} 'a+b*c'", program_name);
        eprintln!("  {} 'x = y ? *p++ : sizeof(int)'", program_name);
        std::process::exit(1);
    }

    // Words of the expression may arrive as separate arguments
    let source = args.join(" ");

    match parenthesize(&source, &TypeRegistry::new()) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
