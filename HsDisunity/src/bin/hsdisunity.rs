fn main() -> anyhow::Result<()> {
    hsdisunity::cli::run_cli()
}
