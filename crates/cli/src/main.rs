use quartet_cli::inputs::StdinInput;
use quartet_cli::RunOptions;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = RunOptions::from_args(&args);
    let mut input = StdinInput;
    if let Err(err) = quartet_cli::run(&options, &mut input) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
