use fibtable::Algorithm;

fn main() -> eyre::Result<()> {
    fibtable_cli::main(Algorithm::Iterative)
}
