use rand::distributions::{Alphanumeric, DistString};
use sqlx::PgConnection;

use kernel::prelude::entity::TicketStatus;
use kernel::KernelError;

use crate::error::ConvertError;

fn random(len: usize) -> String {
    Alphanumeric.sample_string(&mut rand::thread_rng(), len)
}

pub async fn insert_user(con: &mut PgConnection) -> error_stack::Result<i32, KernelError> {
    sqlx::query_scalar::<_, i32>(
        // language=postgresql
        r#"
        INSERT INTO users (email, password)
        VALUES ($1, 'password')
        RETURNING id
        "#,
    )
    .bind(format!("{}@example.com", random(12)))
    .fetch_one(con)
    .await
    .convert_error()
}

pub async fn insert_session(
    con: &mut PgConnection,
    user_id: i32,
) -> error_stack::Result<String, KernelError> {
    let token = random(32);
    sqlx::query(
        // language=postgresql
        r#"
        INSERT INTO sessions (user_id, token)
        VALUES ($1, $2)
        "#,
    )
    .bind(user_id)
    .bind(&token)
    .execute(con)
    .await
    .convert_error()?;
    Ok(token)
}

pub async fn insert_enrollment(
    con: &mut PgConnection,
    user_id: i32,
) -> error_stack::Result<i32, KernelError> {
    let enrollment_id = sqlx::query_scalar::<_, i32>(
        // language=postgresql
        r#"
        INSERT INTO enrollments (user_id, name, cpf, birthday, phone)
        VALUES ($1, 'Participante', $2, '1990-01-01', '(21) 98999-9999')
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(random(11))
    .fetch_one(&mut *con)
    .await
    .convert_error()?;

    sqlx::query(
        // language=postgresql
        r#"
        INSERT INTO addresses (enrollment_id, cep, street, city, state, number, neighborhood)
        VALUES ($1, '95122165', 'Rua', 'Cidade', 'RJ', '10', 'Centro')
        "#,
    )
    .bind(enrollment_id)
    .execute(con)
    .await
    .convert_error()?;
    Ok(enrollment_id)
}

pub async fn insert_ticket(
    con: &mut PgConnection,
    enrollment_id: i32,
    is_remote: bool,
    includes_hotel: bool,
    status: TicketStatus,
) -> error_stack::Result<i32, KernelError> {
    let ticket_type_id = sqlx::query_scalar::<_, i32>(
        // language=postgresql
        r#"
        INSERT INTO ticket_types (name, price, is_remote, includes_hotel)
        VALUES ($1, 600, $2, $3)
        RETURNING id
        "#,
    )
    .bind(random(8))
    .bind(is_remote)
    .bind(includes_hotel)
    .fetch_one(&mut *con)
    .await
    .convert_error()?;

    sqlx::query_scalar::<_, i32>(
        // language=postgresql
        r#"
        INSERT INTO tickets (ticket_type_id, enrollment_id, status)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(ticket_type_id)
    .bind(enrollment_id)
    .bind(status.as_ref())
    .fetch_one(con)
    .await
    .convert_error()
}

pub async fn insert_hotel(con: &mut PgConnection) -> error_stack::Result<i32, KernelError> {
    sqlx::query_scalar::<_, i32>(
        // language=postgresql
        r#"
        INSERT INTO hotels (name, image)
        VALUES ($1, 'https://example.com/hotel.png')
        RETURNING id
        "#,
    )
    .bind(random(8))
    .fetch_one(con)
    .await
    .convert_error()
}

pub async fn insert_room(
    con: &mut PgConnection,
    hotel_id: i32,
) -> error_stack::Result<i32, KernelError> {
    sqlx::query_scalar::<_, i32>(
        // language=postgresql
        r#"
        INSERT INTO rooms (name, capacity, hotel_id)
        VALUES ($1, 2, $2)
        RETURNING id
        "#,
    )
    .bind(random(4))
    .bind(hotel_id)
    .fetch_one(con)
    .await
    .convert_error()
}
