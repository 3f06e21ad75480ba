use actix_web::{delete, get, patch, post, web, HttpResponse};
use chrono::Local;

use crate::error::{json_error_handler, ApiError};
use crate::models::reminder::{NewReminder, ReminderMessage, ReminderPatch};
use crate::repository::database::Database;
use crate::Response;

pub async fn create_reminder(
    db: web::Data<Database>,
    new_reminder: web::Json<NewReminder>,
) -> Result<HttpResponse, ApiError> {
    let reminder = db.create_reminder(new_reminder.into_inner())?;
    Ok(HttpResponse::Created().json(reminder))
}

pub async fn get_reminders(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let reminders = db.get_reminders();
    if reminders.is_empty() {
        return Err(ApiError::NoReminders);
    }
    Ok(HttpResponse::Ok().json(reminders))
}

#[get("/completed")]
pub async fn get_completed_reminders(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let reminders = db.get_reminders_by_completion(true);
    if reminders.is_empty() {
        return Err(ApiError::NoCompletedReminders);
    }
    Ok(HttpResponse::Ok().json(reminders))
}

#[get("/not-completed")]
pub async fn get_not_completed_reminders(
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    let reminders = db.get_reminders_by_completion(false);
    if reminders.is_empty() {
        return Err(ApiError::NoNotCompletedReminders);
    }
    Ok(HttpResponse::Ok().json(reminders))
}

#[get("/due-today")]
pub async fn get_reminders_due_today(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let today = Local::now().date_naive();
    let reminders = db.get_reminders_due_on(today);
    if reminders.is_empty() {
        return Err(ApiError::NoRemindersDueToday);
    }
    Ok(HttpResponse::Ok().json(reminders))
}

#[get("/{id}")]
pub async fn get_reminder_by_id(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reminder = db.get_reminder_by_id(&id).ok_or(ApiError::ReminderNotFound)?;
    Ok(HttpResponse::Ok().json(reminder))
}

#[patch("/{id}")]
pub async fn update_reminder_by_id(
    db: web::Data<Database>,
    id: web::Path<String>,
    patch: web::Json<ReminderPatch>,
) -> Result<HttpResponse, ApiError> {
    let reminder = db
        .update_reminder_by_id(&id, patch.into_inner())
        .ok_or(ApiError::ReminderNotFound)?;
    Ok(HttpResponse::Ok().json(ReminderMessage {
        message: "Reminder updated".to_string(),
        reminder,
    }))
}

#[delete("/{id}")]
pub async fn delete_reminder_by_id(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    db.delete_reminder_by_id(&id).ok_or(ApiError::ReminderNotFound)?;
    Ok(HttpResponse::Ok().json(Response {
        message: "Reminder deleted".to_string(),
    }))
}

#[post("/{id}/mark-completed")]
pub async fn mark_completed(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reminder = db
        .set_completed_by_id(&id, true)
        .ok_or(ApiError::ReminderNotFound)?;
    Ok(HttpResponse::Ok().json(ReminderMessage {
        message: "Reminder marked as completed".to_string(),
        reminder,
    }))
}

#[post("/{id}/unmark-completed")]
pub async fn unmark_completed(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reminder = db
        .set_completed_by_id(&id, false)
        .ok_or(ApiError::ReminderNotFound)?;
    Ok(HttpResponse::Ok().json(ReminderMessage {
        message: "Reminder unmarked as completed".to_string(),
        reminder,
    }))
}

// actix matches in registration order: the literal filter routes must come
// before "/{id}".
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reminders")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(get_completed_reminders)
            .service(get_not_completed_reminders)
            .service(get_reminders_due_today)
            .service(
                web::resource(["", "/"])
                    .route(web::get().to(get_reminders))
                    .route(web::post().to(create_reminder)),
            )
            .service(get_reminder_by_id)
            .service(update_reminder_by_id)
            .service(delete_reminder_by_id)
            .service(mark_completed)
            .service(unmark_completed),
    );
}
