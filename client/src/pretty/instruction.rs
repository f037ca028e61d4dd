use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::{
    Color,
    Colorize,
};
use pnft_interface::{
    instructions::{
        BuyPnft,
        ListPnft,
        PnftMethod,
        TransferPnft,
    },
    program,
    program_ids::*,
};
use solana_sdk::{
    instruction::AccountMeta,
    pubkey::Pubkey,
};

use crate::{
    logs::LogColor,
    pnft_instruction::{
        PnftArgs,
        PnftInstruction,
    },
};

#[rustfmt::skip]
const TRANSFER_ACCOUNT_NAMES: [&str; TransferPnft::NUM_ACCOUNTS] = [
    "owner", "receiver", "src", "dest", "nft_mint", "token_program", "system_program", "rent",
    "associated_token_program", "nft_metadata", "edition", "owner_token_record",
    "dest_token_record", "token_metadata_program", "instructions", "authorization_rules_program",
];

#[rustfmt::skip]
const LIST_ACCOUNT_NAMES: [&str; ListPnft::NUM_ACCOUNTS] = [
    "item", "authority_item_token", "listing", "listing_item_token", "authority", "token_program",
    "system_program", "rent", "associated_token_program", "item_metadata", "edition",
    "authority_token_record", "listing_token_record", "token_metadata_program", "instructions",
    "authorization_rules_program",
];

#[rustfmt::skip]
const BUY_ACCOUNT_NAMES: [&str; BuyPnft::NUM_ACCOUNTS] = [
    "item", "buyer_item_token", "listing", "listing_item_token", "buyer", "token_program",
    "system_program", "rent", "associated_token_program", "item_metadata", "edition",
    "buyer_token_record", "listing_token_record", "token_metadata_program", "instructions",
    "authorization_rules_program", "ruleset",
];

/// The account names the program's `Accounts` struct uses for `method`, in order.
pub fn account_names(method: PnftMethod) -> &'static [&'static str] {
    match method {
        PnftMethod::TransferPnft => &TRANSFER_ACCOUNT_NAMES,
        PnftMethod::ListPnft => &LIST_ACCOUNT_NAMES,
        PnftMethod::BuyPnft => &BUY_ACCOUNT_NAMES,
    }
}

/// Renders a [`PnftInstruction`] as its method, arguments, and named accounts.
pub struct PrettyInstruction<'a> {
    pub instruction: &'a PnftInstruction,
    pub indent: usize,
}

impl Display for PrettyInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let instruction = self.instruction;
        let method = instruction.method();
        let pad = " ".repeat(self.indent);

        let program_name = match KnownProgram::from_program_id(&instruction.program_id) {
            Some(known) => known.to_string(),
            None => instruction.program_id.to_string(),
        };
        writeln!(
            f,
            "{pad}{}::{}({})",
            program_name.color(LogColor::Debug),
            method,
            format_args(&instruction.args, instruction.has_rule_set()),
        )?;

        let names = account_names(method);
        for (i, meta) in instruction.fixed_accounts.iter().enumerate() {
            let name = names.get(i).copied().unwrap_or("unknown");
            writeln!(f, "{pad}  {i:>2}. {}", PrettyAccount { name, meta })?;
        }
        for (i, meta) in instruction.remaining_accounts().iter().enumerate() {
            let i = instruction.fixed_accounts.len() + i;
            let name = "rule_set (remaining)";
            writeln!(f, "{pad}  {i:>2}. {}", PrettyAccount { name, meta })?;
        }

        Ok(())
    }
}

fn format_args(args: &PnftArgs, has_rule_set: bool) -> String {
    let authorization = match args.authorization_data() {
        Some(data) => format!("Some([{}])", data.names().collect::<Vec<_>>().join(", ")),
        None => "None".into(),
    };
    match args {
        PnftArgs::Transfer { .. } | PnftArgs::BuyWithAuthorization { .. } => {
            format!("authorization_data: {authorization}, rules_acc_present: {has_rule_set}")
        }
        PnftArgs::List { price, .. } => format!(
            "price: {price}, authorization_data: {authorization}, rules_acc_present: {has_rule_set}"
        ),
        PnftArgs::Buy => String::new(),
    }
}

struct PrettyAccount<'a> {
    name: &'a str,
    meta: &'a AccountMeta,
}

impl Display for PrettyAccount<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let flags = match (self.meta.is_writable, self.meta.is_signer) {
            (true, true) => "[w, s]",
            (true, false) => "[w]",
            (false, true) => "[s]",
            (false, false) => "",
        };
        let key = match KnownProgram::from_program_id(&self.meta.pubkey) {
            Some(known) => format!("{} ({known})", self.meta.pubkey)
                .color(Color::BrightBlack)
                .to_string(),
            None => self.meta.pubkey.to_string(),
        };
        write!(
            f,
            "{:<28} {key} {}",
            self.name,
            flags.color(LogColor::Highlight)
        )
    }
}

#[derive(strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
enum KnownProgram {
    PnftTransfer,
    SplToken,
    SystemProgram,
    AssociatedTokenAccount,
    TokenMetadata,
    TokenAuthRules,
    ComputeBudget,
    RentSysvar,
    InstructionsSysvar,
}

impl KnownProgram {
    fn from_program_id(program_id: &Pubkey) -> Option<Self> {
        let known = [
            (program::ID, Self::PnftTransfer),
            (SPL_TOKEN_ID, Self::SplToken),
            (SYSTEM_PROGRAM_ID, Self::SystemProgram),
            (SPL_ASSOCIATED_TOKEN_ACCOUNT_ID, Self::AssociatedTokenAccount),
            (TOKEN_METADATA_ID, Self::TokenMetadata),
            (TOKEN_AUTH_RULES_ID, Self::TokenAuthRules),
            (COMPUTE_BUDGET_ID, Self::ComputeBudget),
            (SYSVAR_RENT_ID, Self::RentSysvar),
            (SYSVAR_INSTRUCTIONS_ID, Self::InstructionsSysvar),
        ];
        known
            .into_iter()
            .find_map(|(id, known)| (id == *program_id).then_some(known))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn account_names_are_unique() {
        for method in PnftMethod::iter() {
            let names = account_names(method);
            let mut sorted = names.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), names.len(), "{method}");
        }
    }

    #[test]
    fn names_every_account() {
        colored::control::set_override(false);
        let instruction = PnftInstruction {
            program_id: program::ID,
            fixed_accounts: TransferPnft {
                owner: Pubkey::new_unique(),
                receiver: Pubkey::new_unique(),
                src: Pubkey::new_unique(),
                dest: Pubkey::new_unique(),
                nft_mint: Pubkey::new_unique(),
                nft_metadata: Pubkey::new_unique(),
                edition: Pubkey::new_unique(),
                owner_token_record: Pubkey::new_unique(),
                dest_token_record: Pubkey::new_unique(),
            }
            .create_account_metas()
            .to_vec(),
            rule_set: Some(AccountMeta::new_readonly(Pubkey::new_unique(), false)),
            args: PnftArgs::Transfer {
                authorization_data: None,
            },
        };
        let rendered = PrettyInstruction {
            instruction: &instruction,
            indent: 0,
        }
        .to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "pnft_transfer::transfer_pnft(authorization_data: None, rules_acc_present: true)"
        );
        assert_eq!(lines.len(), 1 + TransferPnft::NUM_ACCOUNTS + 1);
        assert!(lines[1].contains("owner") && lines[1].ends_with("[w, s]"));
        assert!(lines[14].contains("token_metadata"));
        assert!(lines[17].contains("rule_set (remaining)"));
    }
}
