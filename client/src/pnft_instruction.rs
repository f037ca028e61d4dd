//! A built pNFT instruction, with the optional rule set account kept apart from the fixed
//! account list until the instruction is packed.

use pnft_interface::{
    instructions::{
        BuyPnftAuthorizationArgs,
        BuyPnftInstructionData,
        ListPnftInstructionData,
        PnftMethod,
        TransferPnftInstructionData,
    },
    state::authorization::AuthorizationData,
};
use solana_sdk::{
    instruction::{
        AccountMeta,
        Instruction,
    },
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};

use crate::transactions::CustomRpcClient;

/// Method arguments, minus the rule set flag, which is derived from the instruction's tail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PnftArgs {
    Transfer {
        authorization_data: Option<AuthorizationData>,
    },
    List {
        price: u64,
        authorization_data: Option<AuthorizationData>,
    },
    /// `buy_pnft()`, no arguments.
    Buy,
    /// `buy_pnft(authorization_data, rules_acc_present)`.
    BuyWithAuthorization {
        authorization_data: Option<AuthorizationData>,
    },
}

impl PnftArgs {
    pub fn method(&self) -> PnftMethod {
        match self {
            Self::Transfer { .. } => PnftMethod::TransferPnft,
            Self::List { .. } => PnftMethod::ListPnft,
            Self::Buy | Self::BuyWithAuthorization { .. } => PnftMethod::BuyPnft,
        }
    }

    pub fn authorization_data(&self) -> Option<&AuthorizationData> {
        match self {
            Self::Transfer { authorization_data }
            | Self::List {
                authorization_data, ..
            }
            | Self::BuyWithAuthorization { authorization_data } => authorization_data.as_ref(),
            Self::Buy => None,
        }
    }

    fn pack(&self, has_rule_set: bool) -> Vec<u8> {
        match self {
            Self::Transfer { authorization_data } => TransferPnftInstructionData {
                authorization_data: authorization_data.clone(),
                rules_acc_present: has_rule_set,
            }
            .pack(),
            Self::List {
                price,
                authorization_data,
            } => ListPnftInstructionData {
                price: *price,
                authorization_data: authorization_data.clone(),
                rules_acc_present: has_rule_set,
            }
            .pack(),
            Self::Buy => BuyPnftInstructionData::NoArgs.pack(),
            Self::BuyWithAuthorization { authorization_data } => {
                BuyPnftInstructionData::WithAuthorization(BuyPnftAuthorizationArgs {
                    authorization_data: authorization_data.clone(),
                    rules_acc_present: has_rule_set,
                })
                .pack()
            }
        }
    }
}

/// A pNFT program instruction.
///
/// The program reads the rule set, when there is one, from the first remaining account. Keeping
/// it in `rule_set` rather than in `fixed_accounts` means the `rules_acc_present` argument is
/// computed from the same value that adds the account, so the two can't disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PnftInstruction {
    pub program_id: Pubkey,
    pub fixed_accounts: Vec<AccountMeta>,
    pub rule_set: Option<AccountMeta>,
    pub args: PnftArgs,
}

impl PnftInstruction {
    pub fn has_rule_set(&self) -> bool {
        self.rule_set.is_some()
    }

    pub fn method(&self) -> PnftMethod {
        self.args.method()
    }

    pub fn remaining_accounts(&self) -> &[AccountMeta] {
        self.rule_set.as_slice()
    }

    /// The full account list: fixed accounts followed by the rule set, if any.
    pub fn accounts(&self) -> Vec<AccountMeta> {
        self.fixed_accounts
            .iter()
            .chain(self.remaining_accounts())
            .cloned()
            .collect()
    }

    /// Anchor instruction data: discriminator followed by the borsh encoded arguments.
    pub fn data(&self) -> Vec<u8> {
        self.args.pack(self.has_rule_set())
    }

    /// The instruction's only signer.
    pub fn signer(&self) -> anyhow::Result<Pubkey> {
        let mut signers = self.fixed_accounts.iter().filter(|meta| meta.is_signer);
        match (signers.next(), signers.next()) {
            (Some(signer), None) => Ok(signer.pubkey),
            _ => Err(anyhow::Error::msg(
                "This instruction doesn't have exactly one signer.",
            )),
        }
    }

    /// Sends the instruction in its own transaction, paid for and signed by `signer`.
    pub async fn send_single_signer(
        self,
        rpc: &CustomRpcClient,
        signer: &Keypair,
    ) -> anyhow::Result<Signature> {
        let expected = self.signer()?;
        if expected != signer.pubkey() {
            anyhow::bail!(
                "{} must be signed by {expected}, not {}",
                self.method(),
                signer.pubkey()
            );
        }
        rpc.send_single_signer(signer, [self.into()]).await
    }
}

impl From<PnftInstruction> for Instruction {
    fn from(instruction: PnftInstruction) -> Self {
        Instruction {
            data: instruction.data(),
            accounts: instruction.accounts(),
            program_id: instruction.program_id,
        }
    }
}
