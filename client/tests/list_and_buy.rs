use pnft_client::{
    context::{
        pnft::{
            BuyAuthorization,
            PnftConfig,
            PnftContext,
            DEFAULT_BUY_RULE_SET_FALLBACK,
        },
        token::TokenContext,
    },
    pda::{
        find_listing_address,
        find_token_record_address,
        get_associated_token_address,
        get_listing_escrow_address,
    },
    test_fixtures::PnftFixture,
};
use pnft_interface::{
    instructions::{
        BuyPnft,
        BuyPnftInstructionData,
        ListPnft,
        ListPnftInstructionData,
        PnftMethod,
    },
    program,
    state::authorization::SOURCE_SEEDS_KEY,
};
use solana_sdk::{
    instruction::AccountMeta,
    pubkey::Pubkey,
};

const PRICE: u64 = 1_000_000_000;

#[test]
fn list_then_buy_share_the_escrow() -> anyhow::Result<()> {
    // Five creators and no rule set.
    let fixture = PnftFixture::new(None)?;
    let store = fixture.account_store();
    let seller = Pubkey::new_unique();
    let buyer = Pubkey::new_unique();
    let ctx = PnftContext::default();

    let list = ctx.list_for_mint(&store, PRICE, fixture.mint, seller)?;
    let buy = ctx.buy_for_mint(&store, fixture.mint, buyer)?;

    let (listing, _) = find_listing_address(&fixture.mint, &program::ID)?;
    let escrow = get_listing_escrow_address(&fixture.mint, &listing);
    let (escrow_record, _) = find_token_record_address(&fixture.mint, &escrow)?;

    // List moves into the escrow, buy moves out of it.
    assert_eq!(list.fixed_accounts[2], AccountMeta::new(listing, false));
    assert_eq!(list.fixed_accounts[3], AccountMeta::new(escrow, false));
    assert_eq!(list.fixed_accounts[12].pubkey, escrow_record);
    assert_eq!(buy.fixed_accounts[2], AccountMeta::new(listing, false));
    assert_eq!(buy.fixed_accounts[3], AccountMeta::new(escrow, false));
    assert_eq!(buy.fixed_accounts[12].pubkey, escrow_record);

    // Each side's own token account is its associated token account.
    let seller_token = get_associated_token_address(&seller, &fixture.mint);
    let buyer_token = get_associated_token_address(&buyer, &fixture.mint);
    assert_eq!(list.fixed_accounts[1], AccountMeta::new(seller_token, false));
    assert_eq!(list.fixed_accounts[4], AccountMeta::new(seller, true));
    assert_eq!(buy.fixed_accounts[1], AccountMeta::new(buyer_token, false));
    assert_eq!(buy.fixed_accounts[4], AccountMeta::new(buyer, true));
    assert_eq!(
        buy.fixed_accounts[11].pubkey,
        find_token_record_address(&fixture.mint, &buyer_token)?.0
    );

    // Without a rule set, list appends nothing and clears the flag.
    assert!(!list.has_rule_set());
    assert!(list.remaining_accounts().is_empty());
    assert_eq!(list.accounts().len(), ListPnft::NUM_ACCOUNTS);
    assert!(!ListPnftInstructionData::unpack(&list.data())?.rules_acc_present);

    Ok(())
}

#[test]
fn list_then_buy_with_rule_set() -> anyhow::Result<()> {
    let rule_set = Pubkey::new_unique();
    let fixture = PnftFixture::new(Some(rule_set))?;
    let store = fixture.account_store();
    let ctx = PnftContext::default();

    let list = ctx.list_for_mint(&store, PRICE, fixture.mint, Pubkey::new_unique())?;
    let buy = ctx.buy_for_mint(&store, fixture.mint, Pubkey::new_unique())?;

    let rule_set_meta = AccountMeta::new_readonly(rule_set, false);
    assert_eq!(list.remaining_accounts(), [rule_set_meta.clone()]);
    assert!(ListPnftInstructionData::unpack(&list.data())?.rules_acc_present);
    assert_eq!(buy.remaining_accounts(), [rule_set_meta]);
    assert_eq!(
        list.fixed_accounts[12].pubkey,
        buy.fixed_accounts[12].pubkey
    );

    Ok(())
}

#[test]
fn buyer_token_is_the_created_ata() -> anyhow::Result<()> {
    let fixture = PnftFixture::new(None)?;
    let buyer = Pubkey::new_unique();
    let buy = PnftContext::default().buy_for_mint(&fixture.account_store(), fixture.mint, buyer)?;

    // Creating the buyer's token account ahead of the buy targets the same address.
    let token = TokenContext::new(fixture.mint);
    let create = token.create_ata_idempotent(&buyer, &buyer);
    assert_eq!(create.accounts[1].pubkey, token.get_ata_for(&buyer));
    assert_eq!(buy.fixed_accounts[1].pubkey, create.accounts[1].pubkey);

    Ok(())
}

#[test]
fn list_data() -> anyhow::Result<()> {
    let rule_set = Pubkey::new_unique();
    let fixture = PnftFixture::new(Some(rule_set))?;
    let list = PnftContext::default().list_for_mint(
        &fixture.account_store(),
        PRICE,
        fixture.mint,
        Pubkey::new_unique(),
    )?;

    assert_eq!(list.method(), PnftMethod::ListPnft);
    assert_eq!(list.fixed_accounts.len(), ListPnft::NUM_ACCOUNTS);
    assert_eq!(list.accounts().len(), ListPnft::NUM_ACCOUNTS + 1);
    assert_eq!(
        ListPnftInstructionData::unpack(&list.data())?,
        ListPnftInstructionData {
            price: PRICE,
            authorization_data: None,
            rules_acc_present: true,
        }
    );
    // The edition is read-only for list.
    assert!(!list.fixed_accounts[10].is_writable);

    Ok(())
}

#[test]
fn buy_uses_metadata_rule_set() -> anyhow::Result<()> {
    let rule_set = Pubkey::new_unique();
    let fixture = PnftFixture::new(Some(rule_set))?;
    let buy = PnftContext::default().buy_for_mint(
        &fixture.account_store(),
        fixture.mint,
        Pubkey::new_unique(),
    )?;

    assert_eq!(buy.fixed_accounts.len(), BuyPnft::NUM_ACCOUNTS);
    assert_eq!(
        buy.fixed_accounts[BuyPnft::NUM_ACCOUNTS - 1],
        AccountMeta::new_readonly(rule_set, false)
    );
    assert_eq!(
        buy.remaining_accounts(),
        [AccountMeta::new_readonly(rule_set, false)]
    );
    // The edition is writable for buy.
    assert!(buy.fixed_accounts[10].is_writable);
    assert_eq!(buy.data(), PnftMethod::BuyPnft.discriminator());

    Ok(())
}

#[test]
fn buy_falls_back_without_rule_set() -> anyhow::Result<()> {
    let fixture = PnftFixture::new(None)?;
    let buyer = Pubkey::new_unique();

    let buy = PnftContext::default().buy_for_mint(&fixture.account_store(), fixture.mint, buyer)?;
    assert_eq!(
        buy.fixed_accounts[BuyPnft::NUM_ACCOUNTS - 1].pubkey,
        DEFAULT_BUY_RULE_SET_FALLBACK
    );
    assert!(!buy.has_rule_set());
    assert_eq!(buy.accounts().len(), BuyPnft::NUM_ACCOUNTS);

    let fallback = Pubkey::new_unique();
    let buy = PnftContext::new(PnftConfig {
        buy_rule_set_fallback: fallback,
        ..Default::default()
    })
    .buy_for_mint(&fixture.account_store(), fixture.mint, buyer)?;
    assert_eq!(
        buy.fixed_accounts[BuyPnft::NUM_ACCOUNTS - 1].pubkey,
        fallback
    );

    Ok(())
}

#[test]
fn buy_with_source_seeds() -> anyhow::Result<()> {
    let rule_set = Pubkey::new_unique();
    let fixture = PnftFixture::new(Some(rule_set))?;
    let ctx = PnftContext::new(PnftConfig {
        buy_authorization: BuyAuthorization::SourceSeeds,
        ..Default::default()
    });
    let buy = ctx.buy_for_mint(&fixture.account_store(), fixture.mint, Pubkey::new_unique())?;

    let BuyPnftInstructionData::WithAuthorization(args) =
        BuyPnftInstructionData::unpack(&buy.data())?
    else {
        panic!("Expected buy arguments");
    };
    assert!(args.rules_acc_present);
    let authorization = args
        .authorization_data
        .expect("Buy should carry authorization data");
    assert_eq!(authorization.payload.len(), 1);
    assert_eq!(authorization.payload[0].name, SOURCE_SEEDS_KEY);
    assert_eq!(
        authorization.payload[0]
            .payload
            .as_seeds()
            .expect("Payload should be seeds"),
        [fixture.mint.to_bytes().to_vec(), b"listings".to_vec()]
    );

    Ok(())
}

#[test]
fn listing_follows_program_id() -> anyhow::Result<()> {
    let fixture = PnftFixture::new(None)?;
    let program_id = Pubkey::new_unique();
    let ctx = PnftContext::new(PnftConfig {
        program_id,
        ..Default::default()
    });
    let (listing, escrow) = ctx.listing_for_mint(&fixture.mint)?;
    assert_eq!(listing, find_listing_address(&fixture.mint, &program_id)?.0);
    assert_ne!(listing, find_listing_address(&fixture.mint, &program::ID)?.0);
    assert_eq!(escrow, get_listing_escrow_address(&fixture.mint, &listing));

    Ok(())
}
