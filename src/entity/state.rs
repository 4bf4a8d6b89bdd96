#[derive(Clone, Default, Debug)]
pub enum State {
    #[default]
    Start,
    AwaitingImportSecret,
    AwaitingRecipientAddress,
    AwaitingAmount {
        recipient: String,
    },
    AwaitingConfirmation {
        recipient: String,
        amount: f64,
    },
    AwaitingMintAmount,
}
