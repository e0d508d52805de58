use std::path::PathBuf;

use flydec_ir::{Ir, PrimitiveValue, Signal, Token};

pub struct DumpArgs {
    pub ir_path: PathBuf,
    pub json: bool,
}

pub fn run(args: DumpArgs) {
    let ir = match Ir::from_path(&args.ir_path) {
        Ok(ir) => ir,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&ir).expect("IR serializes");
        println!("{}", json);
        return;
    }

    println!("[header]");
    print_tokens(ir.header());
    for tokens in ir.messages() {
        let first = &tokens[0];
        println!();
        println!(
            "[message \"{}\" id={} version={}]",
            first.name, first.field_id, first.token_version
        );
        print_tokens(tokens);
    }
}

fn print_tokens(tokens: &[Token]) {
    let mut depth = 0usize;
    for token in tokens {
        if is_end(token.signal) {
            depth = depth.saturating_sub(1);
        }
        println!("{}{}", "  ".repeat(depth + 1), describe(token));
        if is_begin(token.signal) {
            depth += 1;
        }
    }
}

fn is_begin(signal: Signal) -> bool {
    matches!(
        signal,
        Signal::BeginMessage
            | Signal::BeginComposite
            | Signal::BeginField
            | Signal::BeginGroup
            | Signal::BeginEnum
            | Signal::BeginSet
            | Signal::BeginVarData
    )
}

fn is_end(signal: Signal) -> bool {
    matches!(
        signal,
        Signal::EndMessage
            | Signal::EndComposite
            | Signal::EndField
            | Signal::EndGroup
            | Signal::EndEnum
            | Signal::EndSet
            | Signal::EndVarData
    )
}

fn describe(token: &Token) -> String {
    let enc = &token.encoding;
    let mut line = format!("{:?} \"{}\"", token.signal, token.name);

    if token.field_id != 0 {
        line.push_str(&format!(" id={}", token.field_id));
    }
    line.push_str(&format!(
        " offset={} size={} {:?}",
        token.token_offset, token.token_size, enc.primitive_type
    ));
    if !matches!(enc.const_value, PrimitiveValue::None) {
        line.push_str(&format!(" const={:?}", enc.const_value));
    }
    if !enc.semantic_type.is_empty() {
        line.push_str(&format!(" semantic={}", enc.semantic_type));
    }
    line
}
