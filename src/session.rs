//! The portal session: one headless browser, one page, one operation at a
//! time.

use std::path::PathBuf;

use chromiumoxide::error::CdpError;
use chromiumoxide::Page;
use log::{debug, info};
use scraper::Html;

use crate::browser::{self, BrowserHandle, WaitUntil};
use crate::credentials::Credentials;
use crate::error::SchoolSoftError;
use crate::parser;
use crate::schema::{Assignments, LunchMenu, News, Results, WeeklyPlanning};

/// A student session against one school's SchoolSoft portal.
///
/// Constructed unauthenticated; [`SchoolSoft::login`] must succeed before
/// any data fetch.  All operations take `&mut self` because they share the
/// single navigable page, so one in-flight operation per session is
/// enforced by the borrow checker.  Call [`SchoolSoft::close`] when done;
/// an unclosed session leaves the external browser process to be killed on
/// drop.
pub struct SchoolSoft {
    school: String,
    base_url: String,
    executable: Option<PathBuf>,
    logged_in: bool,
    browser: Option<BrowserHandle>,
    page: Option<Page>,
}

impl SchoolSoft {
    /// `school` selects the portal instance under the shared host
    /// (`https://sms14.schoolsoft.se/<school>/jsp`).
    pub fn new(school: impl Into<String>) -> Self {
        let school = school.into();
        let base_url = format!("https://sms14.schoolsoft.se/{school}/jsp");
        Self {
            school,
            base_url,
            executable: None,
            logged_in: false,
            browser: None,
            page: None,
        }
    }

    /// Like [`SchoolSoft::new`], with an explicit Chromium executable path.
    pub fn with_executable(school: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(path.into()),
            ..Self::new(school)
        }
    }

    pub fn school(&self) -> &str {
        &self.school
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Logs in as a student.  Succeeds iff the portal redirects to the
    /// exact start-page URL; returns that URL.  Credentials are validated
    /// before any browser work, and the browser is launched lazily on the
    /// first attempt.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<String, SchoolSoftError> {
        let credentials = Credentials::new(username, password)?;
        let username: &str = credentials.username.as_ref();
        let password: &str = credentials.password.as_ref();
        let page = self.open().await?;

        let login_url = self.login_url();
        browser::goto(&page, &login_url, WaitUntil::Load).await?;
        let submitted: Result<(), CdpError> = async {
            page.find_element("input#ssusername")
                .await?
                .click()
                .await?
                .type_str(username)
                .await?;
            page.find_element("input#sspassword")
                .await?
                .click()
                .await?
                .type_str(password)
                .await?;
            page.find_element(r#"input[type="submit"]"#)
                .await?
                .click()
                .await?;
            page.wait_for_navigation().await?;
            Ok(())
        }
        .await;
        submitted.map_err(|source| SchoolSoftError::Navigation {
            url: login_url.clone(),
            source,
        })?;

        let url = page
            .url()
            .await
            .map_err(|source| SchoolSoftError::Navigation {
                url: login_url,
                source,
            })?
            .unwrap_or_default();
        if url != self.landing_url() {
            debug!("Post-login URL was {url:?}");
            return Err(SchoolSoftError::InvalidCredentials { url });
        }

        self.logged_in = true;
        info!("Logged in to {}", self.school);
        Ok(url)
    }

    /// The lunch menu, optionally for a specific week.  A week with no
    /// scheduled lunch yields the empty-shaped menu.
    pub async fn get_lunch_menu(
        &mut self,
        week: Option<u32>,
    ) -> Result<LunchMenu, SchoolSoftError> {
        let url = self.lunch_menu_url(week);
        let html = self.fetch(&url, WaitUntil::Load).await?;
        Ok(parser::lunch_menu::parse(&html))
    }

    /// Current news, grouped by category in page order.
    pub async fn get_news(&mut self) -> Result<News, SchoolSoftError> {
        let url = self.news_url();
        let html = self.fetch(&url, WaitUntil::Load).await?;
        Ok(parser::news::parse(&html))
    }

    /// Upcoming and old assignments.
    pub async fn get_assignments(&mut self) -> Result<Assignments, SchoolSoftError> {
        let url = self.assignments_url();
        let html = self.fetch(&url, WaitUntil::Load).await?;
        Ok(parser::assignments::parse(&html))
    }

    /// New and old test results.
    pub async fn get_results(&mut self) -> Result<Results, SchoolSoftError> {
        let url = self.results_url();
        let html = self.fetch(&url, WaitUntil::Load).await?;
        Ok(parser::results::parse(&html))
    }

    /// Weekly planning per subject.  The planning view is a single-page
    /// application that fills in after the initial render, hence the
    /// stricter wait.
    pub async fn get_weekly_planning(&mut self) -> Result<WeeklyPlanning, SchoolSoftError> {
        let url = self.weekly_planning_url();
        let html = self.fetch(&url, WaitUntil::NetworkIdle).await?;
        Ok(parser::weekly_planning::parse(&html))
    }

    /// Releases the browser.  Safe to call repeatedly; every call after the
    /// first is a no-op.
    pub async fn close(&mut self) -> Result<(), SchoolSoftError> {
        self.page = None;
        self.logged_in = false;
        if let Some(handle) = self.browser.take() {
            handle.close().await?;
        }
        Ok(())
    }

    async fn open(&mut self) -> Result<Page, SchoolSoftError> {
        match &self.page {
            Some(page) => Ok(page.clone()),
            None => {
                let (handle, page) = BrowserHandle::launch(self.executable.as_deref()).await?;
                self.browser = Some(handle);
                self.page = Some(page.clone());
                Ok(page)
            }
        }
    }

    /// Gate, navigate, and hand back the parsed document.
    async fn fetch(&mut self, url: &str, wait: WaitUntil) -> Result<Html, SchoolSoftError> {
        let page = match &self.page {
            Some(page) if self.logged_in => page.clone(),
            _ => return Err(SchoolSoftError::NotLoggedIn),
        };
        browser::goto(&page, url, wait).await?;
        let content = page
            .content()
            .await
            .map_err(|source| SchoolSoftError::Navigation {
                url: url.to_owned(),
                source,
            })?;
        Ok(Html::parse_document(&content))
    }

    fn login_url(&self) -> String {
        format!("{}/Login.jsp?usertype=1", self.base_url)
    }

    fn landing_url(&self) -> String {
        format!("{}/student/right_student_startpage.jsp", self.base_url)
    }

    fn lunch_menu_url(&self, week: Option<u32>) -> String {
        match week {
            Some(week) => format!(
                "{}/student/right_student_lunchmenu.jsp?requestid={week}",
                self.base_url
            ),
            None => format!("{}/student/right_student_lunchmenu.jsp", self.base_url),
        }
    }

    fn news_url(&self) -> String {
        format!("{}/student/right_student_news.jsp", self.base_url)
    }

    fn assignments_url(&self) -> String {
        format!("{}/student/right_student_test.jsp", self.base_url)
    }

    fn results_url(&self) -> String {
        format!("{}/student/right_student_test_results.jsp", self.base_url)
    }

    fn weekly_planning_url(&self) -> String {
        format!(
            "{}/student/right_student_planning.jsp?objectpage=1#/overview/weeklyplanning",
            self.base_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SchoolSoft;
    use crate::error::{SchoolSoftError, ValidationError};

    #[test]
    fn base_url_follows_school() {
        let school = SchoolSoft::new("medborgarskolan");
        assert_eq!(
            school.base_url(),
            "https://sms14.schoolsoft.se/medborgarskolan/jsp"
        );
        assert_eq!(
            school.landing_url(),
            "https://sms14.schoolsoft.se/medborgarskolan/jsp/student/right_student_startpage.jsp"
        );
    }

    #[test]
    fn lunch_menu_url_appends_requested_week() {
        let school = SchoolSoft::new("engelska");
        assert_eq!(
            school.lunch_menu_url(None),
            "https://sms14.schoolsoft.se/engelska/jsp/student/right_student_lunchmenu.jsp"
        );
        assert_eq!(
            school.lunch_menu_url(Some(37)),
            "https://sms14.schoolsoft.se/engelska/jsp/student/right_student_lunchmenu.jsp?requestid=37"
        );
    }

    #[tokio::test]
    async fn data_fetch_before_login_fails_fast() {
        let mut school = SchoolSoft::new("engelska");
        assert!(matches!(
            school.get_lunch_menu(None).await,
            Err(SchoolSoftError::NotLoggedIn)
        ));
        assert!(matches!(
            school.get_news().await,
            Err(SchoolSoftError::NotLoggedIn)
        ));
        assert!(matches!(
            school.get_assignments().await,
            Err(SchoolSoftError::NotLoggedIn)
        ));
        assert!(matches!(
            school.get_results().await,
            Err(SchoolSoftError::NotLoggedIn)
        ));
        assert!(matches!(
            school.get_weekly_planning().await,
            Err(SchoolSoftError::NotLoggedIn)
        ));
        assert!(!school.is_logged_in());
    }

    #[tokio::test]
    async fn empty_credentials_rejected_before_any_browser_work() {
        let mut school = SchoolSoft::new("engelska");
        assert!(matches!(
            school.login("", "moment").await,
            Err(SchoolSoftError::Validation(ValidationError::EmptyUsername))
        ));
        assert!(matches!(
            school.login("bruh", "").await,
            Err(SchoolSoftError::Validation(ValidationError::EmptyPassword))
        ));
        assert!(!school.is_logged_in());
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let mut school = SchoolSoft::new("engelska");
        school.close().await.unwrap();
        school.close().await.unwrap();
        assert!(!school.is_logged_in());
    }
}
