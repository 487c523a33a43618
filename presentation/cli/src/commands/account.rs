use business::domain::user::model::{Credentials, ProfileUpdate, Registration, User};
use business::domain::user::use_cases::login::LoginParams;
use business::domain::user::use_cases::register::RegisterParams;
use business::domain::user::use_cases::update_profile::UpdateProfileParams;

use super::error::IntoCliError;
use super::render::render_user;
use crate::cli::{ProfileCommand, ProfileUpdateArgs, RegisterArgs};
use crate::setup::dependency_injection::DependencyContainer;

pub async fn login(
    container: &DependencyContainer,
    login: String,
    password: String,
) -> anyhow::Result<()> {
    let user = container
        .login
        .execute(LoginParams {
            credentials: Credentials { login, password },
        })
        .await
        .map_err(IntoCliError::into_cli_error)?;

    println!("Signed in as {}", user.full_name());
    Ok(())
}

pub async fn register(container: &DependencyContainer, args: RegisterArgs) -> anyhow::Result<()> {
    let registration = Registration {
        login: args.login,
        password: args.password,
        name: args.name,
        surname: args.surname,
        patronymic: args.patronymic,
        accepted_terms: args.accept_terms,
    };

    let user = container
        .register
        .execute(RegisterParams { registration })
        .await
        .map_err(IntoCliError::into_cli_error)?;

    println!("Registered and signed in as {}", user.full_name());
    Ok(())
}

pub async fn logout(container: &DependencyContainer) -> anyhow::Result<()> {
    container
        .logout
        .execute()
        .await
        .map_err(IntoCliError::into_cli_error)?;
    container.basket.clear();

    println!("Signed out");
    Ok(())
}

pub async fn profile(container: &DependencyContainer, command: ProfileCommand) -> anyhow::Result<()> {
    let user = match command {
        ProfileCommand::Show => container.get_profile.execute().await,
        ProfileCommand::Update(args) => {
            let update = merge_with_session(args, container.session.current_user());
            container
                .update_profile
                .execute(UpdateProfileParams { update })
                .await
        }
    }
    .map_err(IntoCliError::into_cli_error)?;

    print!("{}", render_user(&user));
    Ok(())
}

/// Fills fields left out on the command line from the stored session user.
fn merge_with_session(args: ProfileUpdateArgs, current: Option<User>) -> ProfileUpdate {
    let (login, password, name, surname, patronymic) = match current {
        Some(user) => (user.login, user.password, user.name, user.surname, user.patronymic),
        None => Default::default(),
    };

    ProfileUpdate {
        login: args.login.unwrap_or(login),
        password: args.password.unwrap_or(password),
        name: args.name.unwrap_or(name),
        surname: args.surname.unwrap_or(surname),
        patronymic: args.patronymic.or(patronymic),
        photo_path: args.photo,
    }
}
