use std::time::Duration;

use anyhow::Context;
use colored::Colorize;
use pnft_interface::{
    instructions::PnftMethod,
    state::listing::Listing,
};
use solana_account::Account;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    context::token::TokenContext,
    error::PnftClientError,
    logs::{
        log_error,
        log_info,
        log_success,
        LogColor,
    },
    metadata::AccountSource,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

/// Lamports airdropped by [`CustomRpcClient::fund_account`].
pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

const AIRDROP_CONFIRMATION_ATTEMPTS: usize = 10;
const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
        }
    }
}

/// An RPC client paired with the config every transaction it sends is built with.
pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for CustomRpcClient {
    /// Connects to `RPC_URL` if it's set, otherwise to a local validator.
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl CustomRpcClient {
    pub fn new(client: Option<RpcClient>, config: Option<SendTransactionConfig>) -> Self {
        let client = client.unwrap_or_else(|| {
            let url = std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
            RpcClient::new_with_commitment(url, CommitmentConfig::confirmed())
        });
        Self {
            client,
            config: config.unwrap_or_default(),
        }
    }

    pub async fn fund_account(&self, pubkey: &Pubkey) -> anyhow::Result<()> {
        let airdrop_signature = self
            .client
            .request_airdrop(pubkey, DEFAULT_FUND_AMOUNT)
            .context("Failed to request airdrop")?;

        wait_for_confirmation(AIRDROP_CONFIRMATION_ATTEMPTS, AIRDROP_POLL_INTERVAL, || {
            self.client
                .confirm_transaction(&airdrop_signature)
                .context("Couldn't confirm transaction")
        })
        .await
        .with_context(|| format!("Airdrop {airdrop_signature} to {pubkey} wasn't confirmed"))
    }

    pub async fn fund_new_account(&self) -> anyhow::Result<Keypair> {
        let keypair = Keypair::new();
        self.fund_account(&keypair.pubkey()).await?;
        Ok(keypair)
    }

    pub async fn send_single_signer<const N: usize>(
        &self,
        signer: &Keypair,
        instructions: [Instruction; N],
    ) -> anyhow::Result<Signature> {
        self.send_and_confirm_txn(signer, &[], &instructions).await
    }

    /// Signs with `payer` and `signers`, then sends and confirms. Compute budget instructions are
    /// prepended if the config sets a budget.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let bh = self
            .client
            .get_latest_blockhash()
            .context("Couldn't fetch the latest blockhash")?;

        let msg = Message::new(
            &[
                self.config.compute_budget.map_or(vec![], |budget| {
                    vec![
                        ComputeBudgetInstruction::set_compute_unit_limit(budget),
                        ComputeBudgetInstruction::set_compute_unit_price(1),
                    ]
                }),
                instructions.to_vec(),
            ]
            .concat(),
            Some(&payer.pubkey()),
        );

        let mut tx = Transaction::new_unsigned(msg);
        tx.try_sign(
            &[std::iter::once(payer)
                .chain(signers.iter().cloned())
                .collect::<Vec<_>>()]
            .concat(),
            bh,
        )
        .context("Couldn't sign the transaction")?;

        match self.client.send_and_confirm_transaction(&tx) {
            Ok(sig) => {
                if matches!(self.config.debug_logs, Some(true)) {
                    let sender_info =
                        format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                    log_success("Signature", format!("{sig}\n{sender_info}"));
                }
                Ok(sig)
            }
            Err(error) => {
                // Indices in the error count the compute budget instructions too.
                log_instruction_error(&error, tx.message.instructions.len(), instructions);
                log_info("Payer", payer.pubkey());

                Err(error).context("Failed transaction submission")
            }
        }
    }

    /// Creates `owner`'s associated token account for `mint` if it doesn't exist yet.
    pub async fn create_ata_idempotent(
        &self,
        payer: &Keypair,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> anyhow::Result<Pubkey> {
        let token = TokenContext::new(*mint);
        let create = token.create_ata_idempotent(&payer.pubkey(), owner);
        self.send_single_signer(payer, [create]).await?;
        Ok(token.get_ata_for(owner))
    }

    /// The balance of `token_account`, or zero if it doesn't exist.
    pub fn get_token_balance(&self, mint: &Pubkey, token_account: &Pubkey) -> anyhow::Result<u64> {
        match AccountSource::get_account(&self.client, token_account)? {
            Some(account) => TokenContext::new(*mint).balance_from_account_data(&account.data),
            None => Ok(0),
        }
    }

    pub fn fetch_listing(&self, listing: &Pubkey) -> anyhow::Result<Listing> {
        let account = AccountSource::get_account(&self.client, listing)?
            .ok_or(PnftClientError::ListingNotFound(*listing))?;
        Listing::try_from_account_data(&account.data).map_err(|reason| {
            PnftClientError::InvalidListing {
                listing: *listing,
                reason,
            }
            .into()
        })
    }
}

impl AccountSource for CustomRpcClient {
    fn get_account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>> {
        AccountSource::get_account(&self.client, address)
    }
}

/// Polls `is_confirmed` up to `attempts` times, sleeping `interval` between polls. Fails if it
/// never reports a confirmation.
async fn wait_for_confirmation(
    attempts: usize,
    interval: Duration,
    mut is_confirmed: impl FnMut() -> anyhow::Result<bool>,
) -> anyhow::Result<()> {
    for _ in 0..attempts {
        if is_confirmed()? {
            return Ok(());
        }
        tokio::time::sleep(interval).await;
    }
    anyhow::bail!("Still unconfirmed after {attempts} attempts")
}

/// Logs the instruction a preflight failure points at, naming the pNFT method when it's one of
/// ours. `message_len` is the number of instructions actually sent, which includes any compute
/// budget instructions ahead of `instructions`.
pub fn log_instruction_error(error: &ClientError, message_len: usize, instructions: &[Instruction]) {
    use solana_client::rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    };
    use solana_instruction_error::InstructionError;
    use solana_transaction_error::TransactionError;

    let kind = error.kind();
    let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err: Some(ui_err),
                ..
            }),
        ..
    }) = kind
    else {
        log_error("Generic error", error);
        return;
    };

    let TransactionError::InstructionError(ixn_idx, ixn_error) = ui_err.clone().into() else {
        log_error("Transaction error", error);
        return;
    };

    let offset = message_len.saturating_sub(instructions.len());
    let Some(instruction) = (ixn_idx as usize)
        .checked_sub(offset)
        .and_then(|idx| instructions.get(idx))
    else {
        log_error("Instruction error", format!("#{ixn_idx}: {ixn_error}"));
        return;
    };

    let method = PnftMethod::try_from_instruction_data(&instruction.data)
        .ok()
        .map(|method| method.to_string())
        .unwrap_or_else(|| "unknown method".to_string());

    match ixn_error {
        InstructionError::Custom(code) => {
            log_error(
                format!("{} error", instruction.program_id),
                format!("({method}, custom program error {code:#x})"),
            );
        }
        other => log_error(
            format!("{} error", instruction.program_id),
            format!("({method}, {other})"),
        ),
    }
}
