use thiserror::Error;

/// Form input rejected on the client before a request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Informe usuário e senha")]
    MissingCredentials,
    #[error("Preencha todos os campos de senha.")]
    IncompletePasswordFields,
    #[error("A nova senha e a confirmação não coincidem.")]
    PasswordMismatch,
    #[error("Informe o CEP de destino e o peso ou a cubagem")]
    MissingFreightInput,
}
