/*!
 * Shm Fanout - Main Entry Point
 *
 * Fixed-topology multi-process batch: validate the command line, run
 * the controller, map the outcome to an exit code.
 */

use shm_fanout::{controller, ValidatedInput, EXIT_FAILURE};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    println!("Controller: starts");
    println!("Controller: validates command line\n");
    let input = match ValidatedInput::parse(env::args().skip(1)) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(EXIT_FAILURE);
        }
    };

    if let Err(error) = controller::run(&input) {
        eprintln!("Error: {}", error);
        process::exit(EXIT_FAILURE);
    }
}
