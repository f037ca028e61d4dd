//! Transfers a pNFT held by the seller test account to a receiver on a local validator.
//!
//! The mint must already exist, be programmable, and sit in the seller's associated token account.

use clap::Parser;
use pnft_client::{
    context::pnft::{
        PnftConfig,
        PnftContext,
        TransferPnftArgs,
    },
    logs::{
        log_header,
        log_info,
    },
    pda::get_associated_token_address,
    pretty::instruction::PrettyInstruction,
    test_accounts,
    transactions::CustomRpcClient,
};
use solana_sdk::{
    pubkey::Pubkey,
    signer::Signer,
};

#[derive(Parser)]
#[command(about = "Transfer a programmable NFT")]
struct Args {
    /// The pNFT's mint.
    #[arg(long)]
    mint: Pubkey,

    /// Receiving wallet. Defaults to the receiver test account.
    #[arg(long)]
    receiver: Option<Pubkey>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let rpc = &CustomRpcClient::default();
    let ctx = PnftContext::new(PnftConfig {
        debug_logs: true,
        ..Default::default()
    });

    let owner = &*test_accounts::SELLER;
    let receiver = args
        .receiver
        .unwrap_or_else(|| test_accounts::RECEIVER.pubkey());
    rpc.fund_account(&owner.pubkey()).await?;

    let destination_token = rpc
        .create_ata_idempotent(owner, &receiver, &args.mint)
        .await?;

    let transfer = ctx.transfer(
        rpc,
        TransferPnftArgs {
            mint: args.mint,
            source_token: get_associated_token_address(&owner.pubkey(), &args.mint),
            destination_token,
            owner: owner.pubkey(),
            receiver,
            metadata_hint: None,
        },
    )?;

    log_header("transfer_pnft");
    println!(
        "{}",
        PrettyInstruction {
            instruction: &transfer,
            indent: 2,
        }
    );
    transfer.send_single_signer(rpc, owner).await?;

    log_info(
        "Receiver balance",
        rpc.get_token_balance(&args.mint, &destination_token)?,
    );

    Ok(())
}
