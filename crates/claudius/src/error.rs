#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An instruction is required: pass -i/--instruction or use a preset subcommand")]
    MissingInstruction,
}
