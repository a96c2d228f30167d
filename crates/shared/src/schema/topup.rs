use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Topups {
    Table,
    TopupId,
    UserId,
    Amount,
    AccountType,
    AccountNumber,
    Status,
    CreatedAt,
    UpdatedAt,
}
