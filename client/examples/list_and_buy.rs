//! Lists a pNFT held by the seller test account, then buys it with the buyer test account.

use clap::Parser;
use pnft_client::{
    context::pnft::{
        BuyAuthorization,
        PnftConfig,
        PnftContext,
    },
    logs::{
        log_header,
        log_info,
    },
    pretty::instruction::PrettyInstruction,
    test_accounts,
    transactions::CustomRpcClient,
};
use solana_sdk::{
    pubkey::Pubkey,
    signer::Signer,
};

#[derive(Parser)]
#[command(about = "List a programmable NFT for sale and buy it")]
struct Args {
    /// The pNFT's mint.
    #[arg(long)]
    mint: Pubkey,

    /// Listing price in lamports.
    #[arg(long, default_value_t = 100_000_000)]
    price: u64,

    /// Pass the listing's seeds to `buy_pnft` as authorization data.
    #[arg(long)]
    source_seeds: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let rpc = &CustomRpcClient::default();
    let ctx = PnftContext::new(PnftConfig {
        buy_authorization: if args.source_seeds {
            BuyAuthorization::SourceSeeds
        } else {
            BuyAuthorization::Omitted
        },
        debug_logs: true,
        ..Default::default()
    });

    let seller = &*test_accounts::SELLER;
    let buyer = &*test_accounts::BUYER;
    rpc.fund_account(&seller.pubkey()).await?;
    rpc.fund_account(&buyer.pubkey()).await?;

    let list = ctx.list_for_mint(rpc, args.price, args.mint, seller.pubkey())?;
    log_header("list_pnft");
    println!(
        "{}",
        PrettyInstruction {
            instruction: &list,
            indent: 2,
        }
    );
    list.send_single_signer(rpc, seller).await?;

    let (listing, escrow) = ctx.listing_for_mint(&args.mint)?;
    let listing_account = rpc.fetch_listing(&listing)?;
    log_info("Listing item", listing_account.item());
    log_info("Listing escrow", listing_account.item_token());
    log_info("Escrow balance", rpc.get_token_balance(&args.mint, &escrow)?);

    // The program doesn't create the buyer's token account.
    let buyer_token = rpc
        .create_ata_idempotent(buyer, &buyer.pubkey(), &args.mint)
        .await?;

    let buy = ctx.buy_for_mint(rpc, args.mint, buyer.pubkey())?;
    log_header("buy_pnft");
    println!(
        "{}",
        PrettyInstruction {
            instruction: &buy,
            indent: 2,
        }
    );
    buy.send_single_signer(rpc, buyer).await?;

    log_info("Buyer balance", rpc.get_token_balance(&args.mint, &buyer_token)?);

    Ok(())
}
