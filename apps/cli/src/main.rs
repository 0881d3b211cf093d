fn main() -> anyhow::Result<()> {
    poem2csv::run()
}
