use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Not tied to a user row: identifier is usually an email address
        manager
            .create_table(
                Table::create()
                    .table(VerificationToken::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VerificationToken::Identifier).text().not_null())
                    .col(ColumnDef::new(VerificationToken::Token).text().not_null())
                    .col(
                        ColumnDef::new(VerificationToken::Expires)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationToken::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(VerificationToken::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(VerificationToken::Identifier)
                            .col(VerificationToken::Token),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_verification_token_expires")
                    .table(VerificationToken::Table)
                    .col(VerificationToken::Expires)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_verification_token_updated_at
                BEFORE UPDATE ON "verificationToken"
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"DROP TRIGGER IF EXISTS update_verification_token_updated_at ON "verificationToken""#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VerificationToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VerificationToken {
    #[sea_orm(iden = "verificationToken")]
    Table,
    Identifier,
    Token,
    Expires,
    CreatedAt,
    UpdatedAt,
}
