use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Announcements {
    Table,
    AnnouncementId,
    Title,
    Content,
    CreatedAt,
    UpdatedAt,
}
