// libris CLI entry point

use libris_cli::{output, router::CommandRouter};

#[tokio::main]
async fn main() {
    match CommandRouter::route().await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            output::print_error(&e.user_message());
            std::process::exit(2);
        }
    }
}
