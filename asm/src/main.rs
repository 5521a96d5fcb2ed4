use color_print::cformat;
use s8asm::{
    line::{classify, Kind},
    Target, MAGIC,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.slede8")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "main.s8")]
    output: String,

    /// Dump assembled program
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SLEDE8 Assembler");

    println!("1. Read Source");
    println!("  < {}", args.input);
    let source = std::fs::read_to_string(&args.input)
        .expect(&cformat!("<r,s>Failed to open file</>: {}", args.input));

    println!("2. Assemble");
    let target = match s8asm::assemble(&source) {
        Ok(target) => target,
        Err(err) => {
            err.print_diag();
            std::process::exit(1);
        }
    };
    println!(
        "  - {} statements, {} bytes",
        target.pdb.len(),
        target.exe.len()
    );

    println!("3. Write Binary");
    println!("  > {}", args.output);
    std::fs::write(&args.output, &target.exe)
        .expect(&cformat!("<r,s>Failed to write file</>: {}", args.output));

    if args.dump {
        dump(&target);
        println!("------+--------------+---------------------------------------");
    }
}

fn dump(target: &Target) {
    let body = &target.exe[MAGIC.len()..];
    for (idx, info) in target.pdb.iter().enumerate() {
        let start = info.address as usize;
        let end = target
            .pdb
            .get(idx + 1)
            .map(|next| next.address as usize)
            .unwrap_or(body.len());
        let chunk = &body[start..end];
        let bin: String = chunk.iter().map(|b| format!("{:02X} ", b)).collect();

        if chunk.len() == 2 && classify(&info.raw) != Kind::Data {
            let decoded = arch::disasm::Decoded::new(chunk[0], chunk[1]);
            println!(
                "[{:03X}] {:<13}| {:>4}: {}",
                info.address,
                bin,
                info.line + 1,
                decoded.cformat()
            );
        } else {
            println!("[{:03X}] {:<13}| {:>4}: {}", info.address, bin, info.line + 1, info.raw);
        }
    }
}
