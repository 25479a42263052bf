use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};
use crate::state::Breed;

/// 实例化参数：VRF 协调者、订阅 ID、铸造费用与三个品种的元数据 URI
#[cw_serde]
pub struct InstantiateMsg {
    pub vrf_coordinator: String,
    pub subscription_id: u64,
    pub mint_fee: Coin,
    pub breed_uris: [String; 3],
}

/// 执行消息入口（Execute）：付费请求、随机数回调、转移与管理操作
#[cw_serde]
pub enum ExecuteMsg {
    RequestNft {},
    FulfillRandomWords { request_id: String, random_words: Vec<Uint128> },
    TransferNft { recipient: String, token_id: u64 },
    // admin controls
    SetPaused { paused: bool },
    Withdraw {},
}

/// 查询消息入口（Query）：配置、费用、品种表、分类函数与 Token 信息
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    #[returns(MintFeeResponse)]
    MintFee {},
    #[returns(SubscriptionIdResponse)]
    SubscriptionId {},
    #[returns(TokenCounterResponse)]
    TokenCounter {},
    #[returns(BreedUriResponse)]
    BreedUri { index: u8 },
    #[returns(BreedFromModdedRngResponse)]
    BreedFromModdedRng { modded_rng: u64 },
    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    #[returns(BalanceOfResponse)]
    BalanceOf { owner: String },
    #[returns(PendingRequestResponse)]
    PendingRequest { request_id: String },
}

/// 配置查询返回：拥有者、协调者、费用、订阅 ID、暂停标记与计数器
#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub vrf_coordinator: String,
    pub mint_fee: Coin,
    pub subscription_id: u64,
    pub paused: bool,
    pub token_count: u64,
}

/// 集合信息查询返回：名称与符号
#[cw_serde]
pub struct ContractInfoResponse {
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct MintFeeResponse { pub mint_fee: Coin }

#[cw_serde]
pub struct SubscriptionIdResponse { pub subscription_id: u64 }

/// 计数器查询返回：已铸造数量（即下一个 token_id）
#[cw_serde]
pub struct TokenCounterResponse { pub count: u64 }

#[cw_serde]
pub struct BreedUriResponse { pub uri: String }

#[cw_serde]
pub struct BreedFromModdedRngResponse { pub breed: Breed }

#[cw_serde]
pub struct TokenUriResponse { pub token_uri: String }

/// NFT 拥有者查询返回
#[cw_serde]
pub struct OwnerOfResponse { pub owner: String }

#[cw_serde]
pub struct BalanceOfResponse { pub balance: u64 }

/// 待处理请求查询返回：请求者地址（不存在返回 None）
#[cw_serde]
pub struct PendingRequestResponse { pub requester: Option<String> }

/// 迁移参数：空置接口，为未来升级预留
#[cw_serde]
pub struct MigrateMsg {}
