use cosmwasm_schema::{cw_serde, QueryResponses};

/// 实例化参数：空置接口，集合名称、符号与元数据 URI 均为合约内置常量
#[cw_serde]
pub struct InstantiateMsg {}

/// 执行消息入口（Execute）：铸造与 CW721 风格的转移/授权操作
#[cw_serde]
pub enum ExecuteMsg {
    Mint {},
    // CW721-like
    TransferNft { recipient: String, token_id: u64 },
    Approve { spender: String, token_id: u64 },
    Revoke { spender: String, token_id: u64 },
    ApproveAll { operator: String },
    RevokeAll { operator: String },
}

/// 查询消息入口（Query）：集合信息、计数器、Token 元数据与授权
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    #[returns(TokenCounterResponse)]
    TokenCounter {},
    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    #[returns(BalanceOfResponse)]
    BalanceOf { owner: String },
    #[returns(ApprovalResponse)]
    Approval { token_id: u64 },
    #[returns(IsApprovedForAllResponse)]
    IsApprovedForAll { owner: String, operator: String },
    #[returns(AllTokensResponse)]
    AllTokens { start_after: Option<u64>, limit: Option<u32> },
    #[returns(TokensResponse)]
    Tokens { owner: String, start_after: Option<u64>, limit: Option<u32> },
}

/// 集合信息查询返回：名称与符号
#[cw_serde]
pub struct ContractInfoResponse {
    pub name: String,
    pub symbol: String,
}

/// 计数器查询返回：已铸造数量（即下一个 token_id）
#[cw_serde]
pub struct TokenCounterResponse { pub count: u64 }

#[cw_serde]
pub struct TokenUriResponse { pub token_uri: String }

/// NFT 拥有者查询返回
#[cw_serde]
pub struct OwnerOfResponse { pub owner: String }

#[cw_serde]
pub struct BalanceOfResponse { pub balance: u64 }

#[cw_serde]
pub struct ApprovalResponse { pub spender: Option<String> }

#[cw_serde]
pub struct IsApprovedForAllResponse { pub approved: bool }

#[cw_serde]
pub struct AllTokensResponse { pub tokens: Vec<u64> }

#[cw_serde]
pub struct TokensResponse { pub tokens: Vec<u64> }

/// 迁移参数：空置接口，为未来升级预留
#[cw_serde]
pub struct MigrateMsg {}
