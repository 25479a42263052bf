use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

/// random_ipfs_nft 合约错误定义
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid state for this action")]
    InvalidState,

    #[error("Need more funds sent: got {sent}, mint fee is {required}")]
    NeedMoreFundsSent { sent: Uint128, required: Uint128 },

    #[error("Range out of bounds: {modded_rng} exceeds maximum {max}")]
    RangeOutOfBounds { modded_rng: u64, max: u64 },

    #[error("Request {request_id} not found")]
    RequestNotFound { request_id: String },

    #[error("No random words provided")]
    NoRandomWords,

    #[error("Token {token_id} not found")]
    TokenNotFound { token_id: u64 },

    #[error("Nothing to withdraw")]
    NothingToWithdraw,
}
