use crate::errors::auth::{AuthError, RegisterError, UpdateUserError};
use crate::messages::auth::{AuthenticateMessage, RegisterMessage, UpdateUserMessage};
use crate::schema::users;
use crate::{
    db_utils::DbActor,
    models::user::{NewUser, User, UserChangeset, ROLE_USER},
    validation::{validate_generic, validate_username},
};
use actix::Handler;
use bcrypt::{hash, verify, DEFAULT_COST};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error};

impl Handler<RegisterMessage> for DbActor {
    type Result = Result<User, RegisterError>;
    fn handle(&mut self, msg: RegisterMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");
        if !validate_username(&msg.username) || !validate_generic(&msg.password) {
            return Err(RegisterError::ForbiddenFormat);
        }
        let password_hash: String =
            hash(&msg.password, DEFAULT_COST).map_err(|_| RegisterError::InternalError)?;
        let new_user = NewUser {
            username: msg.username,
            hashed_password: password_hash,
            balance: 0,
            role: ROLE_USER.to_string(),
        };

        // The unique constraint on username is the duplicate check; a
        // pre-check read would race with concurrent registrations.
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(&mut conn)
            .map_err(|e| match e {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    RegisterError::UsernameAlreadyRegistered
                }
                other => RegisterError::DieselError(other),
            })
    }
}

impl Handler<AuthenticateMessage> for DbActor {
    type Result = Result<User, AuthError>;

    fn handle(&mut self, msg: AuthenticateMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");

        match users::table
            .filter(users::username.eq(msg.username))
            .first::<User>(&mut conn)
        {
            Ok(user) => {
                let user_hashed_pass = &user.hashed_password;
                if verify(&msg.password, user_hashed_pass).map_err(|_| AuthError::InternalError)? {
                    Ok(user)
                } else {
                    Err(AuthError::InvalidCredentials)
                }
            }
            Err(Error::NotFound) => Err(AuthError::InvalidCredentials),
            Err(_) => Err(AuthError::InternalError),
        }
    }
}

impl Handler<UpdateUserMessage> for DbActor {
    type Result = Result<User, UpdateUserError>;

    fn handle(&mut self, msg: UpdateUserMessage, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = self.0.get().expect("Failed to get connection");

        if let Some(ref username) = msg.username {
            if !validate_username(username) {
                return Err(UpdateUserError::ForbiddenFormat);
            }
        }
        if let Some(ref password) = msg.password {
            if !validate_generic(password) {
                return Err(UpdateUserError::ForbiddenFormat);
            }
        }

        let hashed_password = match msg.password {
            Some(password) => {
                Some(hash(&password, DEFAULT_COST).map_err(|_| UpdateUserError::InternalError)?)
            }
            None => None,
        };
        let changes = UserChangeset {
            username: msg.username,
            hashed_password,
        };
        if changes.is_empty() {
            return users::table
                .find(msg.user_id)
                .first::<User>(&mut conn)
                .map_err(|e| match e {
                    Error::NotFound => UpdateUserError::NotFound,
                    other => UpdateUserError::DieselError(other),
                });
        }

        diesel::update(users::table.find(msg.user_id))
            .set(&changes)
            .get_result::<User>(&mut conn)
            .map_err(|e| match e {
                Error::NotFound => UpdateUserError::NotFound,
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    UpdateUserError::UsernameTaken
                }
                other => UpdateUserError::DieselError(other),
            })
    }
}
