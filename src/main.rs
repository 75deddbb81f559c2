fn main() -> eyre::Result<()> {
    imgmeta::main()
}
