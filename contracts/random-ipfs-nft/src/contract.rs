use cosmwasm_std::{attr, to_json_binary, BankMsg, Coin, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult, Uint128};
use sha2::Digest;
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{BalanceOfResponse, BreedFromModdedRngResponse, BreedUriResponse, ConfigResponse, ContractInfoResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, MintFeeResponse, OwnerOfResponse, PendingRequestResponse, QueryMsg, SubscriptionIdResponse, TokenCounterResponse, TokenUriResponse};
use crate::state::{Breed, Config, TokenInfo, BALANCES, BREED_URIS, CONFIG, REQUESTS, TOKENS};

/// 合约名称与版本（用于迁移安全校验）
const CONTRACT_NAME: &str = "crates.io:random_ipfs_nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 集合名称与符号（固定，实例化时不可修改）
pub const NAME: &str = "Random IPFS NFT";
pub const SYMBOL: &str = "RIN";

/// 随机数取模上限：modded_rng 的有效取值范围为 [0, MAX_CHANCE_VALUE)
pub const MAX_CHANCE_VALUE: u64 = 100;
/// 品种概率阈值（累进上界）：[0,10) Pug，[10,40) ShibaInu，[40,100) StBernard
const BREED_CHANCES: [u64; 3] = [10, 40, MAX_CHANCE_VALUE];

/// 初始化合约：设置拥有者、VRF 协调者、铸造费用、订阅 ID 与品种 URI 表
pub fn instantiate(deps: DepsMut, _env: Env, info: MessageInfo, msg: InstantiateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let vrf_coordinator = deps.api.addr_validate(&msg.vrf_coordinator)?;
    let config = Config {
        owner: info.sender.clone(),
        vrf_coordinator: vrf_coordinator.clone(),
        mint_fee: msg.mint_fee.clone(),
        subscription_id: msg.subscription_id,
        paused: false,
        token_count: 0,
        request_nonce: 0,
    };
    CONFIG.save(deps.storage, &config)?;
    BREED_URIS.save(deps.storage, &msg.breed_uris)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("owner", info.sender),
        attr("vrf_coordinator", vrf_coordinator),
        attr("mint_fee_denom", msg.mint_fee.denom),
        attr("mint_fee_amount", msg.mint_fee.amount),
        attr("subscription_id", msg.subscription_id.to_string()),
    ]))
}

/// 执行入口：根据消息分派到具体执行函数
pub fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecuteMsg) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RequestNft {} => exec_request_nft(deps, env, info),
        ExecuteMsg::FulfillRandomWords { request_id, random_words } => exec_fulfill_random_words(deps, info, request_id, random_words),
        ExecuteMsg::TransferNft { recipient, token_id } => exec_transfer(deps, info, recipient, token_id),
        ExecuteMsg::SetPaused { paused } => exec_set_paused(deps, info, paused),
        ExecuteMsg::Withdraw {} => exec_withdraw(deps, env, info),
    }
}

/// 断言调用者为拥有者，返回最新配置
fn must_owner(deps: &DepsMut, sender: &cosmwasm_std::Addr) -> Result<Config, ContractError> {
    let cfg: Config = CONFIG.load(deps.storage)?;
    if cfg.owner != *sender {
        return Err(ContractError::Unauthorized);
    }
    Ok(cfg)
}

/// 付费请求铸造：校验费用后登记待处理请求，并在属性中发出 request_id
fn exec_request_nft(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    if cfg.paused {
        return Err(ContractError::InvalidState);
    }

    let fee_denom = cfg.mint_fee.denom.clone();
    let sent = info
        .funds
        .iter()
        .find(|c| c.denom == fee_denom)
        .cloned()
        .unwrap_or(Coin { denom: fee_denom.clone(), amount: Uint128::zero() });

    if sent.amount < cfg.mint_fee.amount {
        return Err(ContractError::NeedMoreFundsSent {
            sent: sent.amount,
            required: cfg.mint_fee.amount,
        });
    }

    // request_id = sha256(height|time|contract|sender|nonce) 前 16 字节的 hex
    let preimage = format!(
        "{}|{}|{}|{}|{}",
        env.block.height,
        env.block.time.seconds(),
        env.contract.address,
        info.sender,
        cfg.request_nonce,
    );
    let hash = sha2::Sha256::digest(preimage.as_bytes());
    let request_id = hex::encode(&hash[..16]);

    REQUESTS.save(deps.storage, request_id.clone(), &info.sender)?;
    cfg.request_nonce += 1;
    CONFIG.save(deps.storage, &cfg)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "request_nft"),
        attr("request_id", request_id),
        attr("requester", info.sender),
    ]))
}

/// VRF 回调：仅协调者可调用；按随机数分类品种并铸造给原请求者，请求单次消费
fn exec_fulfill_random_words(
    deps: DepsMut,
    info: MessageInfo,
    request_id: String,
    random_words: Vec<Uint128>,
) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    if info.sender != cfg.vrf_coordinator {
        return Err(ContractError::Unauthorized);
    }

    let requester = REQUESTS
        .may_load(deps.storage, request_id.clone())?
        .ok_or_else(|| ContractError::RequestNotFound { request_id: request_id.clone() })?;

    let word = random_words.first().ok_or(ContractError::NoRandomWords)?;
    let modded_rng = (word.u128() % MAX_CHANCE_VALUE as u128) as u64;
    let breed = breed_from_modded_rng(modded_rng)?;

    let token_id = cfg.token_count;
    TOKENS.save(deps.storage, token_id, &TokenInfo { owner: requester.clone(), breed })?;
    let balance = BALANCES.may_load(deps.storage, requester.clone())?.unwrap_or(0);
    BALANCES.save(deps.storage, requester.clone(), &(balance + 1))?;

    // 计数器每次成功铸造只递增一次
    cfg.token_count += 1;
    CONFIG.save(deps.storage, &cfg)?;

    REQUESTS.remove(deps.storage, request_id.clone());

    Ok(Response::new().add_attributes(vec![
        attr("action", "fulfill_random_words"),
        attr("request_id", request_id),
        attr("token_id", token_id.to_string()),
        attr("breed", format_breed(&breed)),
        attr("owner", requester),
    ]))
}

/// 将 [0, 100) 的随机数映射为品种：[0,10) Pug，[10,40) ShibaInu，[40,100) StBernard
pub fn breed_from_modded_rng(modded_rng: u64) -> Result<Breed, ContractError> {
    let mut cumulative = 0u64;
    for (i, upper) in BREED_CHANCES.iter().enumerate() {
        if modded_rng >= cumulative && modded_rng < *upper {
            return match i {
                0 => Ok(Breed::Pug),
                1 => Ok(Breed::ShibaInu),
                _ => Ok(Breed::StBernard),
            };
        }
        cumulative = *upper;
    }
    Err(ContractError::RangeOutOfBounds { modded_rng, max: MAX_CHANCE_VALUE - 1 })
}

/// 将品种枚举转为字符串
fn format_breed(breed: &Breed) -> String {
    match breed {
        Breed::Pug => "pug".to_string(),
        Breed::ShibaInu => "shiba_inu".to_string(),
        Breed::StBernard => "st_bernard".to_string(),
    }
}

/// 转移 NFT：仅当前所有者可转移
fn exec_transfer(deps: DepsMut, info: MessageInfo, recipient: String, token_id: u64) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let mut token = TOKENS.may_load(deps.storage, token_id)?.ok_or(ContractError::TokenNotFound { token_id })?;
    if token.owner != info.sender {
        return Err(ContractError::Unauthorized);
    }

    let from = token.owner.clone();
    let from_balance = BALANCES.may_load(deps.storage, from.clone())?.unwrap_or(0);
    BALANCES.save(deps.storage, from.clone(), &from_balance.saturating_sub(1))?;
    let to_balance = BALANCES.may_load(deps.storage, recipient.clone())?.unwrap_or(0);
    BALANCES.save(deps.storage, recipient.clone(), &(to_balance + 1))?;

    token.owner = recipient.clone();
    TOKENS.save(deps.storage, token_id, &token)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "transfer_nft"),
        attr("from", from),
        attr("to", recipient),
        attr("token_id", token_id.to_string()),
    ]))
}

/// 仅拥有者：设置暂停标记（暂停只拦截新请求，已登记的请求仍可回调）
fn exec_set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    let mut cfg = must_owner(&deps, &info.sender)?;
    cfg.paused = paused;
    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::new().add_attributes(vec![attr("action", "set_paused"), attr("paused", paused.to_string())]))
}

/// 仅拥有者：提取合约累计的铸造费用
fn exec_withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let cfg = must_owner(&deps, &info.sender)?;

    let balance = deps.querier.query_balance(env.contract.address, cfg.mint_fee.denom.clone())?;
    if balance.amount.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    let msg = BankMsg::Send {
        to_address: cfg.owner.to_string(),
        amount: vec![balance.clone()],
    };

    Ok(Response::new().add_message(msg).add_attributes(vec![
        attr("action", "withdraw"),
        attr("amount", balance.amount),
    ]))
}

/// 查询入口：根据查询消息返回对应的序列化结果
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<cosmwasm_std::Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ContractInfo {} => to_json_binary(&query_contract_info()?),
        QueryMsg::MintFee {} => to_json_binary(&query_mint_fee(deps)?),
        QueryMsg::SubscriptionId {} => to_json_binary(&query_subscription_id(deps)?),
        QueryMsg::TokenCounter {} => to_json_binary(&query_token_counter(deps)?),
        QueryMsg::BreedUri { index } => to_json_binary(&query_breed_uri(deps, index)?),
        QueryMsg::BreedFromModdedRng { modded_rng } => to_json_binary(&query_breed_from_modded_rng(modded_rng)?),
        QueryMsg::TokenUri { token_id } => to_json_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::OwnerOf { token_id } => to_json_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::BalanceOf { owner } => to_json_binary(&query_balance_of(deps, owner)?),
        QueryMsg::PendingRequest { request_id } => to_json_binary(&query_pending_request(deps, request_id)?),
    }
}

/// 迁移：空置实现，为未来升级预留
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("message", "Migration completed - no changes applied"))
}

/// 查询全局配置
fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: cfg.owner.to_string(),
        vrf_coordinator: cfg.vrf_coordinator.to_string(),
        mint_fee: cfg.mint_fee,
        subscription_id: cfg.subscription_id,
        paused: cfg.paused,
        token_count: cfg.token_count,
    })
}

/// 查询集合名称与符号
fn query_contract_info() -> StdResult<ContractInfoResponse> {
    Ok(ContractInfoResponse { name: NAME.to_string(), symbol: SYMBOL.to_string() })
}

/// 查询铸造费用
fn query_mint_fee(deps: Deps) -> StdResult<MintFeeResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(MintFeeResponse { mint_fee: cfg.mint_fee })
}

/// 查询 VRF 订阅 ID
fn query_subscription_id(deps: Deps) -> StdResult<SubscriptionIdResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(SubscriptionIdResponse { subscription_id: cfg.subscription_id })
}

/// 查询已铸造数量
fn query_token_counter(deps: Deps) -> StdResult<TokenCounterResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(TokenCounterResponse { count: cfg.token_count })
}

/// 查询品种表中指定下标的元数据 URI
fn query_breed_uri(deps: Deps, index: u8) -> StdResult<BreedUriResponse> {
    let uris = BREED_URIS.load(deps.storage)?;
    let uri = uris
        .get(index as usize)
        .ok_or_else(|| StdError::generic_err(format!("breed index {} out of range", index)))?;
    Ok(BreedUriResponse { uri: uri.clone() })
}

/// 查询随机数对应的品种（越界返回错误）
fn query_breed_from_modded_rng(modded_rng: u64) -> StdResult<BreedFromModdedRngResponse> {
    let breed = breed_from_modded_rng(modded_rng).map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(BreedFromModdedRngResponse { breed })
}

/// 查询 Token 元数据 URI（由品种查表得到）
fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<TokenUriResponse> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::not_found(format!("token {}", token_id)))?;
    let uris = BREED_URIS.load(deps.storage)?;
    Ok(TokenUriResponse { token_uri: uris[token.breed.index()].clone() })
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

/// 查询待处理请求的请求者（不存在返回 None）
fn query_pending_request(deps: Deps, request_id: String) -> StdResult<PendingRequestResponse> {
    let requester = REQUESTS.may_load(deps.storage, request_id)?;
    Ok(PendingRequestResponse { requester: requester.map(|a| a.to_string()) })
}
