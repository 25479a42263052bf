use cosmwasm_std::{Addr, Coin};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 全局配置（只存一份）：拥有者、VRF 协调者、铸造费用、订阅 ID、暂停标记与计数器
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    pub vrf_coordinator: Addr,
    pub mint_fee: Coin,
    pub subscription_id: u64,
    pub paused: bool,
    pub token_count: u64,
    pub request_nonce: u64,
}

/// 品种：随机数分类得到的三种结果
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub enum Breed {
    Pug,
    ShibaInu,
    StBernard,
}

impl Breed {
    /// 品种在 BreedTable 中的下标
    pub fn index(&self) -> usize {
        match self {
            Breed::Pug => 0,
            Breed::ShibaInu => 1,
            Breed::StBernard => 2,
        }
    }
}

/// Token 信息：所有者与品种（URI 由品种查表得到）
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenInfo {
    pub owner: Addr,
    pub breed: Breed,
}

/// 单实例配置项
pub const CONFIG: Item<Config> = Item::new("config");
/// 品种 → 元数据 URI（固定 3 项，实例化时写入）
pub const BREED_URIS: Item<[String; 3]> = Item::new("breed_uris");
pub const TOKENS: Map<u64, TokenInfo> = Map::new("tokens");
/// 待处理随机数请求：request_id → 请求者
pub const REQUESTS: Map<String, Addr> = Map::new("requests");
/// 地址 → 持有数量
pub const BALANCES: Map<Addr, u64> = Map::new("balances");
