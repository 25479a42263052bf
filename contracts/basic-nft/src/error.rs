use cosmwasm_std::StdError;
use thiserror::Error;

/// basic_nft 合约错误定义
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Token {token_id} not found")]
    TokenNotFound { token_id: u64 },
}
