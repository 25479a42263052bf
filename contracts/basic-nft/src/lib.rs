//! basic_nft
//!
//! A CosmWasm NFT collection ("Doggie") supporting:
//! - Free sequential minting (token_id counts up from 0)
//! - One shared metadata URI for every token
//! - CW721-like transfer and approval operations
//! - Paginated token enumeration
//!
//! CosmWasm 基础 NFT 合约（"Doggie"），功能包括：
//! - 免费顺序铸造（token_id 从 0 递增，每次成功铸造递增一次）
//! - 所有 Token 共享同一份元数据 URI
//! - CW721 风格的转移与授权操作
//! - 支持分页的 Token 枚举查询
pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
pub use crate::contract::{instantiate, execute, query, migrate};
