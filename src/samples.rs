//! Built-in demo emails, served read-only at `/v1/samples`.
//! They are plain inputs; analyzing one goes through the engine like any other text.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmailSample {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub content: &'static str,
}

static SAMPLES: &[EmailSample] = &[
    EmailSample {
        id: "1",
        title: "Professional Business Inquiry",
        category: "business",
        content: "Dear Mr. Johnson,

I hope this email finds you well. I am writing to inquire about the possibility of scheduling a meeting to discuss our upcoming project collaboration.

Our team has been impressed with your company's recent work in the sustainable technology sector, and we believe there could be significant synergies between our organizations.

Would you be available for a call next week? I am flexible with timing and can accommodate your schedule.

Looking forward to your response.

Best regards,
Sarah Mitchell
Project Manager
GreenTech Solutions",
    },
    EmailSample {
        id: "2",
        title: "Customer Complaint",
        category: "complaint",
        content: "To Whom It May Concern,

I am extremely disappointed with the service I received yesterday. The delivery was not only 3 hours late, but the package was also damaged when it arrived.

This is completely unacceptable, especially considering the premium price I paid for expedited shipping. I have been a loyal customer for over 5 years, and this experience has left me questioning whether I should continue doing business with your company.

I demand a full refund and an explanation for this poor service. If this matter is not resolved immediately, I will be forced to escalate this complaint and share my negative experience on social media.

I expect a response within 24 hours.

Frustrated Customer,
Robert Chen",
    },
    EmailSample {
        id: "3",
        title: "Thank You Note",
        category: "appreciation",
        content: "Hi Jennifer,

I just wanted to take a moment to express my heartfelt gratitude for all your help during the conference last week. Your presentation was absolutely fantastic, and the insights you shared were incredibly valuable.

Thanks to your guidance, I was able to connect with several potential clients and learn about innovative approaches I hadn't considered before. You truly went above and beyond to make the event successful.

I'm excited about the possibility of collaborating on future projects and would love to grab coffee sometime to discuss ideas further.

With sincere appreciation,
Amanda Rodriguez
Marketing Director",
    },
    EmailSample {
        id: "4",
        title: "Technical Support Request",
        category: "inquiry",
        content: "Hello Support Team,

I'm experiencing some technical difficulties with your software and could use some assistance. When I try to export data from the analytics dashboard, the system gives me an error message saying \"Export failed - please try again later.\"

I've tried refreshing the page and logging out and back in, but the problem persists. This is affecting my ability to prepare reports for tomorrow's board meeting.

Could someone please help me resolve this issue as soon as possible? I'm using Chrome browser version 115.0.5790.110 on Windows 11.

Thank you for your assistance.

Best,
James Wilson
Data Analyst
TechCorp Industries",
    },
    EmailSample {
        id: "5",
        title: "Friendly Team Update",
        category: "casual",
        content: "Hey team!

Hope everyone's having an awesome week! Just wanted to give you all a quick update on the marketing campaign we launched on Monday.

The numbers are looking pretty amazing so far - we're already at 150% of our projected engagement rate! I think the new creative direction is really resonating with our audience.

Also, don't forget about our team lunch this Friday at that new pizza place downtown. Can't wait to celebrate our wins together!

Let me know if you have any questions. Keep being awesome!

Cheers,
Alex
Marketing Team Lead",
    },
    EmailSample {
        id: "6",
        title: "Urgent Project Deadline",
        category: "urgent",
        content: "Subject: URGENT - Project Deadline Moved Up

Hi everyone,

I just received word from the client that they need to move up our project deadline by two weeks. I know this is short notice, but we need to adapt quickly.

The new deadline is now August 15th instead of August 30th. This means we need to accelerate our timeline significantly.

I understand this puts pressure on everyone, but I'm confident we can deliver quality work on time if we work together.

Please respond by EOD today with your availability and concerns.

Thanks,
David Park
Project Manager",
    },
];

pub fn samples() -> &'static [EmailSample] {
    SAMPLES
}

pub fn find(id: &str) -> Option<&'static EmailSample> {
    SAMPLES.iter().find(|s| s.id == id)
}
