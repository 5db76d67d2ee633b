fn main() -> anyhow::Result<()> {
    classictext::cli::run_cli()
}
