use axc_drv::{parse_args, print_help, run};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
