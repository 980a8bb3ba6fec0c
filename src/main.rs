fn main() -> anyhow::Result<()> {
    rulid::main()
}
