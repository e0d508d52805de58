use std::path::PathBuf;

use flydec_ir::{Ir, Signal};

pub struct InfoArgs {
    pub ir_path: PathBuf,
}

pub fn run(args: InfoArgs) {
    let ir = match Ir::from_path(&args.ir_path) {
        Ok(ir) => ir,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let frame = ir.frame();
    println!("package   \"{}\"", frame.package_name);
    if !frame.namespace_name.is_empty() {
        println!("namespace \"{}\"", frame.namespace_name);
    }
    println!("ir id     {}", frame.ir_id);
    println!("schema    version {}", frame.schema_version);
    if !frame.semantic_version.is_empty() {
        println!("semantic  version \"{}\"", frame.semantic_version);
    }

    let header_name = &ir.header()[0].name;
    println!("header    \"{}\" ({} tokens)", header_name, ir.header().len());

    println!("messages  {}", ir.messages().len());
    for tokens in ir.messages() {
        let first = &tokens[0];
        // A list not opened by BEGIN_MESSAGE is unreachable via lookup; say so.
        let note = if first.signal == Signal::BeginMessage {
            ""
        } else {
            " (no BEGIN_MESSAGE)"
        };
        println!(
            "  \"{}\" id={} version={} ({} tokens){}",
            first.name,
            first.field_id,
            first.token_version,
            tokens.len(),
            note
        );
    }
}
