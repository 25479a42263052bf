use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 全局配置（只存一份）：集合名称、符号与已铸造数量（即下一个 token_id）
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub token_count: u64,
}

/// 最小化的 Token 信息：顺序 id → 所有者，单次授权地址
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenInfo {
    pub owner: Addr,
    pub approved: Option<Addr>,
}

/// 单实例配置项
pub const CONFIG: Item<Config> = Item::new("config");
pub const TOKENS: Map<u64, TokenInfo> = Map::new("tokens");
/// （owner, operator）→ 是否为全局操作员
pub const OPERATORS: Map<(Addr, Addr), bool> = Map::new("operators");
/// 地址 → 持有数量
pub const BALANCES: Map<Addr, u64> = Map::new("balances");
