#![allow(dead_code)]

use cosmwasm_std::{
    testing::{mock_dependencies, mock_env}, MessageInfo, OwnedDeps,
};
use basic_nft::{
    contract::{instantiate, query},
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
};

/// 测试常量
pub const OWNER: &str = "owner";
pub const USER1: &str = "user1";
pub const USER2: &str = "user2";
pub const OPERATOR: &str = "operator";

/// 创建测试环境
pub fn setup_test_env() -> (OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>, cosmwasm_std::Env) {
    let deps = mock_dependencies();
    let env = mock_env();
    (deps, env)
}

/// 初始化合约
pub fn instantiate_contract(
    deps: &mut OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>,
    env: &cosmwasm_std::Env,
) -> Result<cosmwasm_std::Response, basic_nft::error::ContractError> {
    let info = MessageInfo {
        sender: cosmwasm_std::Addr::unchecked(OWNER),
        funds: vec![],
    };
    instantiate(deps.as_mut(), env.clone(), info, InstantiateMsg {})
}

/// 创建铸造消息
pub fn create_mint_msg(sender: &str) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::Mint {};
    let info = MessageInfo {
        sender: cosmwasm_std::Addr::unchecked(sender),
        funds: vec![],
    };
    (msg, info)
}

/// 创建NFT转移消息
pub fn create_transfer_msg(sender: &str, recipient: String, token_id: u64) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::TransferNft { recipient, token_id };
    let info = MessageInfo {
        sender: cosmwasm_std::Addr::unchecked(sender),
        funds: vec![],
    };
    (msg, info)
}

/// 创建NFT授权消息
pub fn create_approve_msg(sender: &str, spender: String, token_id: u64) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::Approve { spender, token_id };
    let info = MessageInfo {
        sender: cosmwasm_std::Addr::unchecked(sender),
        funds: vec![],
    };
    (msg, info)
}

/// 创建撤销授权消息
pub fn create_revoke_msg(sender: &str, spender: String, token_id: u64) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::Revoke { spender, token_id };
    let info = MessageInfo {
        sender: cosmwasm_std::Addr::unchecked(sender),
        funds: vec![],
    };
    (msg, info)
}

/// 创建全局授权消息
pub fn create_approve_all_msg(sender: &str, operator: String) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::ApproveAll { operator };
    let info = MessageInfo {
        sender: cosmwasm_std::Addr::unchecked(sender),
        funds: vec![],
    };
    (msg, info)
}

/// 创建取消全局授权消息
pub fn create_revoke_all_msg(sender: &str, operator: String) -> (ExecuteMsg, MessageInfo) {
    let msg = ExecuteMsg::RevokeAll { operator };
    let info = MessageInfo {
        sender: cosmwasm_std::Addr::unchecked(sender),
        funds: vec![],
    };
    (msg, info)
}

/// 查询集合信息
pub fn query_contract_info(deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>) -> basic_nft::msg::ContractInfoResponse {
    let msg = QueryMsg::ContractInfo {};
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}

/// 查询计数器
pub fn query_token_counter(deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>) -> basic_nft::msg::TokenCounterResponse {
    let msg = QueryMsg::TokenCounter {};
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}

/// 查询Token URI
pub fn query_token_uri(deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>, token_id: u64) -> basic_nft::msg::TokenUriResponse {
    let msg = QueryMsg::TokenUri { token_id };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}

/// 查询NFT所有者
pub fn query_owner_of(deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>, token_id: u64) -> basic_nft::msg::OwnerOfResponse {
    let msg = QueryMsg::OwnerOf { token_id };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}

/// 查询持有数量
pub fn query_balance_of(deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>, owner: &str) -> basic_nft::msg::BalanceOfResponse {
    let msg = QueryMsg::BalanceOf { owner: owner.to_string() };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}

/// 查询单次授权
pub fn query_approval(deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>, token_id: u64) -> basic_nft::msg::ApprovalResponse {
    let msg = QueryMsg::Approval { token_id };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}

/// 查询全局授权
pub fn query_is_approved_for_all(
    deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>,
    owner: &str,
    operator: &str,
) -> basic_nft::msg::IsApprovedForAllResponse {
    let msg = QueryMsg::IsApprovedForAll {
        owner: owner.to_string(),
        operator: operator.to_string(),
    };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}

/// 查询所有Token ID列表
pub fn query_all_tokens(
    deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> basic_nft::msg::AllTokensResponse {
    let msg = QueryMsg::AllTokens { start_after, limit };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}

/// 查询指定用户的Token ID列表
pub fn query_tokens(
    deps: &OwnedDeps<cosmwasm_std::MemoryStorage, cosmwasm_std::testing::MockApi, cosmwasm_std::testing::MockQuerier>,
    owner: &str,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> basic_nft::msg::TokensResponse {
    let msg = QueryMsg::Tokens { owner: owner.to_string(), start_after, limit };
    let res = query(deps.as_ref(), mock_env(), msg).unwrap();
    cosmwasm_std::from_json(res).unwrap()
}
