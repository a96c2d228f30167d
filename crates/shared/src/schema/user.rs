use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Users {
    Table,
    UserId,
    Fullname,
    Mobile,
    Email,
    Password,
    CreatedAt,
    UpdatedAt,
}
