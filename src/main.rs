use std::env;
use std::process;

use log::debug;
use pmcc::config::Config;
use pmcc::{CompileError, generate_assembly};

fn main() {
  let config = Config::from_env();
  initialize_logging(config);

  // Arguments that are not valid UTF-8 are lexed in lossy form, so a stray
  // byte shows up as U+FFFD and is rejected by the tokenizer at its offset.
  let args: Vec<String> = env::args_os()
    .map(|arg| arg.to_string_lossy().into_owned())
    .collect();
  if args.len() != 2 {
    let program = args.first().map(String::as_str).unwrap_or("pmcc");
    let err = CompileError::Usage {
      program: program.to_string(),
    };
    eprintln!("{err}");
    process::exit(1);
  }

  let expr = &args[1];
  debug!("compiling {expr:?}");
  match generate_assembly(expr) {
    Ok(asm) => print!("{asm}"),
    Err(err) => {
      eprintln!("{}", err.render(expr));
      process::exit(1);
    }
  }
}

fn initialize_logging(config: Config) {
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{}[{}][{}] {}",
        chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
        record.target(),
        record.level(),
        message
      ))
    })
    .level(config.log_level)
    .chain(std::io::stderr())
    .apply()
    .ok();
}
