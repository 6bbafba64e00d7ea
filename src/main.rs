fn main() -> anyhow::Result<()> {
    convertr::cli::run()
}
