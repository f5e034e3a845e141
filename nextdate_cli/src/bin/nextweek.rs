use nextdate::Target;

// Arguments are ignored; every invocation prints the date.
fn main() -> anyhow::Result<()> {
    nextdate_cli::run(Target::NextSaturday)
}
