use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Accounts,
    Auth,
    Goals,
    Tags,
    Transactions,
    Users,
}
