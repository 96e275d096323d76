use std::sync::{Arc, Mutex, MutexGuard};

use time::OffsetDateTime;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnEnrollmentQuery, DependOnRoomQuery,
    DependOnSessionQuery, DependOnTicketQuery, EnrollmentQuery, RoomQuery, SessionQuery,
    TicketQuery,
};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingId, CreatedAt, Enrollment, EnrollmentId, EnrollmentName, HotelId,
    IncludesHotel, IsRemote, Room, RoomCapacity, RoomId, RoomName, Session, SessionId,
    SessionToken, Ticket, TicketId, TicketPrice, TicketStatus, TicketType, TicketTypeId,
    TicketTypeName, UpdatedAt, UserId,
};
use kernel::KernelError;

#[derive(Default)]
pub(crate) struct Store {
    pub enrollments: Vec<Enrollment>,
    pub tickets: Vec<Ticket>,
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub sessions: Vec<Session>,
}

/// In-memory stand-in for the postgres driver. Writes are visible immediately
/// and never rolled back.
#[derive(Clone, Default)]
pub(crate) struct MockDatabase(Arc<Mutex<Store>>);

impl MockDatabase {
    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.0.lock().expect("store poisoned")
    }

    pub fn add_enrollment(&self, user_id: i32) -> EnrollmentId {
        let mut store = self.store();
        let id = EnrollmentId::new(store.enrollments.len() as i32 + 1);
        store.enrollments.push(Enrollment::new(
            id,
            UserId::new(user_id),
            EnrollmentName::new(format!("user{user_id}")),
            None,
        ));
        id
    }

    pub fn add_ticket(
        &self,
        enrollment_id: EnrollmentId,
        is_remote: bool,
        includes_hotel: bool,
        status: TicketStatus,
    ) {
        let mut store = self.store();
        let id = store.tickets.len() as i32 + 1;
        store.tickets.push(Ticket::new(
            TicketId::new(id),
            enrollment_id,
            status,
            TicketType::new(
                TicketTypeId::new(id),
                TicketTypeName::new("ticket"),
                TicketPrice::new(250),
                IsRemote::new(is_remote),
                IncludesHotel::new(includes_hotel),
            ),
        ));
    }

    /// Enrollment plus a paid, presential ticket with hotel.
    pub fn add_eligible_user(&self, user_id: i32) {
        let enrollment_id = self.add_enrollment(user_id);
        self.add_ticket(enrollment_id, false, true, TicketStatus::Paid);
    }

    pub fn add_room(&self, room_id: i32) {
        let now = OffsetDateTime::now_utc();
        self.store().rooms.push(Room::new(
            RoomId::new(room_id),
            RoomName::new(format!("{room_id:03}")),
            RoomCapacity::new(3),
            HotelId::new(1),
            CreatedAt::new(now),
            UpdatedAt::new(now),
        ));
    }

    pub fn add_booking(&self, user_id: i32, room_id: i32) -> BookingId {
        let mut store = self.store();
        let booking = new_booking(&store, UserId::new(user_id), RoomId::new(room_id));
        let id = *booking.id();
        store.bookings.push(booking);
        id
    }

    pub fn add_session(&self, user_id: i32, token: &str) {
        let mut store = self.store();
        let id = SessionId::new(store.sessions.len() as i32 + 1);
        store
            .sessions
            .push(Session::new(id, UserId::new(user_id), SessionToken::new(token)));
    }

    pub fn booking_of(&self, user_id: i32) -> Option<Booking> {
        let user_id = UserId::new(user_id);
        self.store()
            .bookings
            .iter()
            .find(|booking| booking.user_id() == &user_id)
            .cloned()
    }
}

fn new_booking(store: &Store, user_id: UserId, room_id: RoomId) -> Booking {
    let id = store
        .bookings
        .iter()
        .map(|booking| *booking.id().as_ref())
        .max()
        .unwrap_or(0)
        + 1;
    let now = OffsetDateTime::now_utc();
    Booking::new(
        BookingId::new(id),
        user_id,
        room_id,
        CreatedAt::new(now),
        UpdatedAt::new(now),
    )
}

pub(crate) struct MockTransaction(Arc<Mutex<Store>>);

impl MockTransaction {
    fn store(&self) -> MutexGuard<'_, Store> {
        self.0.lock().expect("store poisoned")
    }
}

#[async_trait::async_trait]
impl Transaction for MockTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for MockDatabase {
    type Transaction = MockTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(MockTransaction(Arc::clone(&self.0)))
    }
}

pub(crate) struct MockRepository;

#[async_trait::async_trait]
impl EnrollmentQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_by_user_id(
        &self,
        con: &mut MockTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Enrollment>, KernelError> {
        Ok(con
            .store()
            .enrollments
            .iter()
            .find(|enrollment| enrollment.user_id() == user_id)
            .cloned())
    }
}

#[async_trait::async_trait]
impl TicketQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_by_enrollment_id(
        &self,
        con: &mut MockTransaction,
        enrollment_id: &EnrollmentId,
    ) -> error_stack::Result<Option<Ticket>, KernelError> {
        Ok(con
            .store()
            .tickets
            .iter()
            .find(|ticket| ticket.enrollment_id() == enrollment_id)
            .cloned())
    }
}

#[async_trait::async_trait]
impl RoomQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &RoomId,
    ) -> error_stack::Result<Option<Room>, KernelError> {
        Ok(con.store().rooms.iter().find(|room| room.id() == id).cloned())
    }
}

#[async_trait::async_trait]
impl BookingQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_by_room_id(
        &self,
        con: &mut MockTransaction,
        room_id: &RoomId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        Ok(con
            .store()
            .bookings
            .iter()
            .find(|booking| booking.room_id() == room_id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        con: &mut MockTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        Ok(con
            .store()
            .bookings
            .iter()
            .find(|booking| booking.user_id() == user_id)
            .cloned())
    }

    async fn find_with_room_by_user_id(
        &self,
        con: &mut MockTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<(Booking, Room)>, KernelError> {
        let store = con.store();
        let found = store
            .bookings
            .iter()
            .find(|booking| booking.user_id() == user_id)
            .and_then(|booking| {
                store
                    .rooms
                    .iter()
                    .find(|room| room.id() == booking.room_id())
                    .map(|room| (booking.clone(), room.clone()))
            });
        Ok(found)
    }
}

#[async_trait::async_trait]
impl BookingModifier for MockRepository {
    type Transaction = MockTransaction;
    async fn create(
        &self,
        con: &mut MockTransaction,
        user_id: &UserId,
        room_id: &RoomId,
    ) -> error_stack::Result<Booking, KernelError> {
        let mut store = con.store();
        let booking = new_booking(&store, *user_id, *room_id);
        store.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_room(
        &self,
        con: &mut MockTransaction,
        booking_id: &BookingId,
        user_id: &UserId,
        room_id: &RoomId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let mut store = con.store();
        let Some(booking) = store
            .bookings
            .iter_mut()
            .find(|booking| booking.id() == booking_id && booking.user_id() == user_id)
        else {
            return Ok(None);
        };
        *booking = Booking::new(
            *booking_id,
            *user_id,
            *room_id,
            booking.created_at().clone(),
            UpdatedAt::new(OffsetDateTime::now_utc()),
        );
        Ok(Some(booking.clone()))
    }
}

#[async_trait::async_trait]
impl SessionQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_by_token(
        &self,
        con: &mut MockTransaction,
        token: &SessionToken,
    ) -> error_stack::Result<Option<Session>, KernelError> {
        Ok(con
            .store()
            .sessions
            .iter()
            .find(|session| session.token() == token)
            .cloned())
    }
}

impl DependOnEnrollmentQuery for MockDatabase {
    type EnrollmentQuery = MockRepository;
    fn enrollment_query(&self) -> &Self::EnrollmentQuery {
        &MockRepository
    }
}

impl DependOnTicketQuery for MockDatabase {
    type TicketQuery = MockRepository;
    fn ticket_query(&self) -> &Self::TicketQuery {
        &MockRepository
    }
}

impl DependOnRoomQuery for MockDatabase {
    type RoomQuery = MockRepository;
    fn room_query(&self) -> &Self::RoomQuery {
        &MockRepository
    }
}

impl DependOnBookingQuery for MockDatabase {
    type BookingQuery = MockRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &MockRepository
    }
}

impl DependOnBookingModifier for MockDatabase {
    type BookingModifier = MockRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &MockRepository
    }
}

impl DependOnSessionQuery for MockDatabase {
    type SessionQuery = MockRepository;
    fn session_query(&self) -> &Self::SessionQuery {
        &MockRepository
    }
}
