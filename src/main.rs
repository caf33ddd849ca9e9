use std::process::ExitCode;

use clerk::store::StoreError;

fn main() -> ExitCode {
    if let Err(err) = clerk::run() {
        match err.chain().find_map(|e| e.downcast_ref::<StoreError>()) {
            Some(store_err) => eprintln!("error [{}]: {err:#}", store_err.status()),
            None => eprintln!("error: {err:#}"),
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
