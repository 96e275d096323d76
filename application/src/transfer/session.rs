pub struct AuthenticateDto {
    pub token: String,
}
