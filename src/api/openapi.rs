//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    availability, bookings, capacity, clients, constraints, gift_vouchers, health, products,
    schedule,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Termas API",
        version = "1.0.0",
        description = "Spa booking management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Capacity
        capacity::get_capacity,
        capacity::update_capacity,
        // Clients
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        clients::find_duplicates,
        // Products
        products::list_products,
        products::get_product,
        products::get_product_baths,
        products::create_product,
        products::update_product,
        products::delete_product,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking,
        bookings::list_booking_logs,
        bookings::create_booking_log,
        // Gift vouchers
        gift_vouchers::list_vouchers,
        gift_vouchers::get_voucher,
        gift_vouchers::create_voucher,
        gift_vouchers::update_voucher,
        gift_vouchers::use_voucher,
        gift_vouchers::delete_voucher,
        // Availability
        availability::list_availability,
        availability::get_availability,
        availability::get_availability_for_day,
        availability::create_availability,
        availability::update_availability,
        availability::save_day_availability,
        availability::save_weekday_availability,
        availability::delete_availability,
        // Constraints
        constraints::list_constraints,
        constraints::get_constraint,
        constraints::get_constraint_for_day,
        constraints::save_day_constraint,
        constraints::delete_constraint,
        // Schedule
        schedule::get_day_schedule,
    ),
    components(
        schemas(
            // Health
            health::HealthResponse,
            // Capacity
            crate::models::capacity::Capacity,
            crate::models::capacity::UpdateCapacity,
            // Clients
            crate::models::client::Client,
            crate::models::client::CreateClient,
            crate::models::client::UpdateClient,
            crate::models::client::DuplicateQuery,
            // Products
            crate::models::product::Product,
            crate::models::product::ProductBath,
            crate::models::product::BathType,
            crate::models::product::BathLine,
            crate::models::product::CreateProduct,
            crate::models::product::UpdateProduct,
            crate::models::product::MassageType,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingDetail,
            crate::models::booking::BookingLog,
            crate::models::booking::CreateBooking,
            crate::models::booking::NewBookingClient,
            crate::models::booking::BathRequest,
            crate::models::booking::UpdateBookingDetail,
            crate::models::booking::CreateBookingLog,
            // Gift vouchers
            crate::models::gift_voucher::GiftVoucher,
            crate::models::gift_voucher::CreateGiftVoucher,
            crate::models::gift_voucher::UpdateGiftVoucher,
            // Availability
            crate::models::availability::Availability,
            crate::models::availability::AvailabilityKind,
            crate::models::availability::AvailabilityRange,
            crate::models::availability::SaveAvailability,
            crate::models::availability::SaveDayAvailability,
            crate::models::availability::SaveWeekdayAvailability,
            // Constraints
            crate::models::constraint::Constraint,
            crate::models::constraint::ConstraintRange,
            crate::models::constraint::SaveConstraint,
            crate::models::constraint::ConstraintDeleted,
            constraints::SaveConstraintResponse,
            // Schedule
            crate::models::schedule::DaySchedule,
            crate::models::schedule::ScheduleSlotSummary,
            crate::models::schedule::BookingMinutesError,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "capacity", description = "Venue capacity"),
        (name = "clients", description = "Client management"),
        (name = "products", description = "Products and bath compositions"),
        (name = "bookings", description = "Reservations and audit logs"),
        (name = "gift-vouchers", description = "Gift vouchers"),
        (name = "availability", description = "Massagist availability"),
        (name = "constraints", description = "Reservation restrictions"),
        (name = "schedule", description = "Daily schedule grid")
    )
)]
pub struct ApiDoc;

/// Router serving the Swagger UI and the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
