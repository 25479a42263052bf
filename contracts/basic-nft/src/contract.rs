use cosmwasm_std::{attr, to_json_binary, Addr, Deps, DepsMut, Env, MessageInfo, Order, Response, StdError, StdResult};
use cw_storage_plus::Bound;
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{AllTokensResponse, ApprovalResponse, BalanceOfResponse, ContractInfoResponse, ExecuteMsg, InstantiateMsg, IsApprovedForAllResponse, MigrateMsg, OwnerOfResponse, QueryMsg, TokenCounterResponse, TokenUriResponse, TokensResponse};
use crate::state::{Config, TokenInfo, BALANCES, CONFIG, OPERATORS, TOKENS};

/// 合约名称与版本（用于迁移安全校验）
const CONTRACT_NAME: &str = "crates.io:basic_nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 集合名称与符号（固定，实例化时不可修改）
pub const NAME: &str = "Doggie";
pub const SYMBOL: &str = "DOG";
/// 所有 Token 共享的元数据 URI
pub const TOKEN_URI: &str = "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json";

/// 默认分页条数
const DEFAULT_LIMIT: u32 = 50;

/// 初始化合约：写入集合名称与符号，计数器从 0 开始
pub fn instantiate(deps: DepsMut, _env: Env, _info: MessageInfo, _msg: InstantiateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        name: NAME.to_string(),
        symbol: SYMBOL.to_string(),
        token_count: 0,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("name", NAME),
        attr("symbol", SYMBOL),
    ]))
}

/// 执行入口：根据消息分派到具体执行函数
pub fn execute(deps: DepsMut, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {} => exec_mint(deps, info),
        ExecuteMsg::TransferNft { recipient, token_id } => exec_transfer(deps, info, recipient, token_id),
        ExecuteMsg::Approve { spender, token_id } => exec_approve(deps, info, spender, token_id),
        ExecuteMsg::Revoke { spender, token_id } => exec_revoke(deps, info, spender, token_id),
        ExecuteMsg::ApproveAll { operator } => exec_approve_all(deps, info, operator),
        ExecuteMsg::RevokeAll { operator } => exec_revoke_all(deps, info, operator),
    }
}

/// 铸造：顺序分配 token_id 给调用者，计数器每次成功铸造只递增一次
fn exec_mint(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    let token_id = cfg.token_count;

    TOKENS.save(deps.storage, token_id, &TokenInfo { owner: info.sender.clone(), approved: None })?;
    let balance = BALANCES.may_load(deps.storage, info.sender.clone())?.unwrap_or(0);
    BALANCES.save(deps.storage, info.sender.clone(), &(balance + 1))?;

    cfg.token_count += 1;
    CONFIG.save(deps.storage, &cfg)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "mint"),
        attr("owner", info.sender),
        attr("token_id", token_id.to_string()),
    ]))
}

/// 判断 sender 是否可操作该 Token（所有者、单次授权地址或全局操作员）
fn can_send(deps: &DepsMut, sender: &Addr, token: &TokenInfo) -> StdResult<bool> {
    if token.owner == *sender {
        return Ok(true);
    }
    if token.approved.as_ref() == Some(sender) {
        return Ok(true);
    }
    let op = OPERATORS.may_load(deps.storage, (token.owner.clone(), sender.clone()))?.unwrap_or(false);
    Ok(op)
}

/// 转移 NFT：更新所有者与双方持有数量，并清除单次授权
fn exec_transfer(deps: DepsMut, info: MessageInfo, recipient: String, token_id: u64) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let mut token = TOKENS.may_load(deps.storage, token_id)?.ok_or(ContractError::TokenNotFound { token_id })?;
    if !can_send(&deps, &info.sender, &token)? {
        return Err(ContractError::Unauthorized);
    }

    let from = token.owner.clone();
    let from_balance = BALANCES.may_load(deps.storage, from.clone())?.unwrap_or(0);
    BALANCES.save(deps.storage, from.clone(), &from_balance.saturating_sub(1))?;
    let to_balance = BALANCES.may_load(deps.storage, recipient.clone())?.unwrap_or(0);
    BALANCES.save(deps.storage, recipient.clone(), &(to_balance + 1))?;

    // 转移后清除单次授权
    token.owner = recipient.clone();
    token.approved = None;
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "transfer_nft"),
        attr("from", from),
        attr("to", recipient),
        attr("token_id", token_id.to_string()),
    ]))
}

/// 授权某地址对单个 NFT 的转移权限（仅所有者或全局操作员可设置）
fn exec_approve(deps: DepsMut, info: MessageInfo, spender: String, token_id: u64) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;
    let mut token = TOKENS.may_load(deps.storage, token_id)?.ok_or(ContractError::TokenNotFound { token_id })?;
    if token.owner != info.sender {
        let op = OPERATORS.may_load(deps.storage, (token.owner.clone(), info.sender.clone()))?.unwrap_or(false);
        if !op {
            return Err(ContractError::Unauthorized);
        }
    }

    token.approved = Some(spender.clone());
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "approve"),
        attr("token_id", token_id.to_string()),
        attr("spender", spender),
    ]))
}

/// 撤销单个 NFT 的授权
fn exec_revoke(deps: DepsMut, info: MessageInfo, spender: String, token_id: u64) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;
    let mut token = TOKENS.may_load(deps.storage, token_id)?.ok_or(ContractError::TokenNotFound { token_id })?;
    if token.owner != info.sender {
        let op = OPERATORS.may_load(deps.storage, (token.owner.clone(), info.sender.clone()))?.unwrap_or(false);
        if !op {
            return Err(ContractError::Unauthorized);
        }
    }

    token.approved = None;
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "revoke"),
        attr("token_id", token_id.to_string()),
        attr("spender", spender),
    ]))
}

/// 设置全局操作员（对调用者名下所有 NFT 有操作权限）
fn exec_approve_all(deps: DepsMut, info: MessageInfo, operator: String) -> Result<Response, ContractError> {
    let operator = deps.api.addr_validate(&operator)?;
    OPERATORS.save(deps.storage, (info.sender.clone(), operator.clone()), &true)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "approve_all"),
        attr("owner", info.sender),
        attr("operator", operator),
    ]))
}

/// 取消全局操作员
fn exec_revoke_all(deps: DepsMut, info: MessageInfo, operator: String) -> Result<Response, ContractError> {
    let operator = deps.api.addr_validate(&operator)?;
    OPERATORS.remove(deps.storage, (info.sender.clone(), operator.clone()));

    Ok(Response::new().add_attributes(vec![
        attr("action", "revoke_all"),
        attr("owner", info.sender),
        attr("operator", operator),
    ]))
}

/// 查询入口：根据查询消息返回对应的序列化结果
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<cosmwasm_std::Binary> {
    match msg {
        QueryMsg::ContractInfo {} => to_json_binary(&query_contract_info(deps)?),
        QueryMsg::TokenCounter {} => to_json_binary(&query_token_counter(deps)?),
        QueryMsg::TokenUri { token_id } => to_json_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::BalanceOf { owner } => to_json_binary(&query_balance_of(deps, owner)?),
        QueryMsg::Approval { token_id } => to_json_binary(&query_approval(deps, token_id)?),
        QueryMsg::IsApprovedForAll { owner, operator } => to_json_binary(&query_is_approved_for_all(deps, owner, operator)?),
        QueryMsg::AllTokens { start_after, limit } => to_json_binary(&query_all_tokens(deps, start_after, limit)?),
        QueryMsg::Tokens { owner, start_after, limit } => to_json_binary(&query_tokens(deps, owner, start_after, limit)?),
    }
}

/// 迁移：空置实现，为未来升级预留
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("message", "Migration completed - no changes applied"))
}

/// 查询集合名称与符号
fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ContractInfoResponse { name: cfg.name, symbol: cfg.symbol })
}

/// 查询已铸造数量
fn query_token_counter(deps: Deps) -> StdResult<TokenCounterResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(TokenCounterResponse { count: cfg.token_count })
}

/// 查询 Token 元数据 URI（所有 Token 共享同一常量）
fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<TokenUriResponse> {
    TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::not_found(format!("token {}", token_id)))?;
    Ok(TokenUriResponse { token_uri: TOKEN_URI.to_string() })
}

/// 查询 NFT 所有者
fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<OwnerOfResponse> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::not_found(format!("token {}", token_id)))?;
    Ok(OwnerOfResponse { owner: token.owner.to_string() })
}

/// 查询指定地址的持有数量（未持有返回 0）
fn query_balance_of(deps: Deps, owner: String) -> StdResult<BalanceOfResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let balance = BALANCES.may_load(deps.storage, owner)?.unwrap_or(0);
    Ok(BalanceOfResponse { balance })
}

/// 查询单次授权地址
fn query_approval(deps: Deps, token_id: u64) -> StdResult<ApprovalResponse> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::not_found(format!("token {}", token_id)))?;
    Ok(ApprovalResponse { spender: token.approved.map(|a| a.to_string()) })
}

/// 查询是否设置了全局操作员
fn query_is_approved_for_all(deps: Deps, owner: String, operator: String) -> StdResult<IsApprovedForAllResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let operator = deps.api.addr_validate(&operator)?;
    let approved = OPERATORS.may_load(deps.storage, (owner, operator))?.unwrap_or(false);
    Ok(IsApprovedForAllResponse { approved })
}

/// 查询所有 Token ID 列表（支持分页）
fn query_all_tokens(deps: Deps, start_after: Option<u64>, limit: Option<u32>) -> StdResult<AllTokensResponse> {
    let take = limit.unwrap_or(DEFAULT_LIMIT) as usize;
    let min = start_after.map(Bound::exclusive);
    let tokens = TOKENS
        .keys(deps.storage, min, None, Order::Ascending)
        .take(take)
        .collect::<StdResult<Vec<u64>>>()?;
    Ok(AllTokensResponse { tokens })
}

/// 查询指定用户拥有的 Token ID 列表（支持分页）
fn query_tokens(deps: Deps, owner: String, start_after: Option<u64>, limit: Option<u32>) -> StdResult<TokensResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let take = limit.unwrap_or(DEFAULT_LIMIT) as usize;
    let min = start_after.map(Bound::exclusive);
    let mut tokens: Vec<u64> = Vec::with_capacity(take);
    for item in TOKENS.range(deps.storage, min, None, Order::Ascending) {
        let (id, token) = item?;
        if token.owner == owner {
            tokens.push(id);
            if tokens.len() >= take {
                break;
            }
        }
    }
    Ok(TokensResponse { tokens })
}
