use anyhow::Result;

fn main() -> Result<()> {
    chat_wrapped::utils::init_logging();
    chat_wrapped::cli::run()
}
