//! random_ipfs_nft
//!
//! A CosmWasm NFT collection minted through a VRF coordinator:
//! - Fee-gated mint requests (funds below the mint fee are rejected)
//! - Pending requests keyed by a hash-derived request identifier
//! - Coordinator-only fulfillment that classifies the random word into one
//!   of three breeds and mints the breed's IPFS metadata to the requester
//! - Owner-settable pause flag and fee withdrawal
//!
//! CosmWasm 随机 NFT 合约，铸造流程经由 VRF 协调者完成：
//! - 付费请求铸造（费用不足直接拒绝）
//! - 待处理请求以哈希派生的 request_id 为键登记
//! - 仅协调者可回调随机数；随机数分类为三种品种之一，
//!   并将该品种的 IPFS 元数据铸造给原请求者
//! - 拥有者可设置暂停标记与提取累计费用
pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
pub use crate::contract::{instantiate, execute, query, migrate};
