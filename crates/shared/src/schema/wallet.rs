use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Wallets {
    Table,
    WalletId,
    UserId,
    Balance,
    CreatedAt,
    UpdatedAt,
}
